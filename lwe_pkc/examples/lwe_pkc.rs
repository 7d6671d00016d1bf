use lwe_pkc::{LweEncryptor, LweParameters, LweSecretKey, LWE_DEMO_PARAMETERS};
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let mut rng = rand::thread_rng();
    let params = LweParameters::new(LWE_DEMO_PARAMETERS)?;

    // generate keys
    let mut sk = LweSecretKey::new(&params, None, &mut rng)?;
    let pk = sk.get_public_keys(&mut rng)?;
    info!("secret: {:?}", sk.secret());
    for (a, t) in pk.a_list().zip(pk.t_list()) {
        info!("equation: A = {a:?}, T = {t}");
    }

    let encryptor = LweEncryptor::new(pk);

    let bit = 1;
    let c = encryptor.encrypt_bit(bit, &mut rng)?;
    info!("ciphertext: A' = {:?}, T' = {}", c.a(), c.b());

    let decrypted = sk.decrypt_bit(&c)?;
    info!("encrypted {bit}, decrypted {decrypted}");
    assert_eq!(decrypted, bit);

    Ok(())
}
