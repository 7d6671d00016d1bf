use lwe_pkc::{
    ascii_to_bits, bits_to_ascii, EncryptionMode, LweEncryptor, LweParameters, LweSecretKey,
    LWE_WEAKENED_DEMO_PARAMETERS,
};
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let mut rng = rand::thread_rng();
    let params = LweParameters::new(LWE_WEAKENED_DEMO_PARAMETERS)?;

    let mut sk = LweSecretKey::new(&params, None, &mut rng)?;
    let pk = sk.get_public_keys(&mut rng)?;
    let encryptor = LweEncryptor::with_mode(pk, EncryptionMode::Weakened);

    let message = [1, 1, 0];
    let c = encryptor.encrypt_message(&message, &mut rng)?;
    let decrypted = sk.decrypt_message(&c)?;
    info!("encrypted {message:?}, decrypted {decrypted:?}");
    assert_eq!(decrypted, message);

    let text = "Hello, LWE!";
    let c = encryptor.encrypt_message(&ascii_to_bits(text)?, &mut rng)?;
    info!("{} ciphertexts for {text:?}", c.len());
    let decrypted = bits_to_ascii(&sk.decrypt_message(&c)?)?;
    info!("decrypted {decrypted:?}");
    assert_eq!(decrypted, text);

    Ok(())
}
