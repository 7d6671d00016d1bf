use lwe_pkc::{RlweEncryptor, RlweParameters, RlweSecretKey, RLWE_DEMO_PARAMETERS};
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let mut rng = rand::thread_rng();
    let params = RlweParameters::new(RLWE_DEMO_PARAMETERS)?;
    info!("ring: Z_{}[x]/({})", params.modulus(), params.quotient());

    let mut sk = RlweSecretKey::new(&params, None, &mut rng)?;
    let pk = sk.get_public_keys(&mut rng)?;
    info!("secret: {}", sk.secret());
    for (a, t) in pk.a_list().zip(pk.t_list()) {
        info!("equation: A = {a}, T = {t}");
    }

    let encryptor = RlweEncryptor::new(pk);

    let message = [1, 0, 1, 1];
    let c = encryptor.encrypt_message(&message, &mut rng)?;
    info!("ciphertext: A' = {}, T' = {}", c.a(), c.b());

    let decrypted = sk.decrypt_message(&c)?;
    info!("encrypted {message:?}, decrypted {decrypted:?}");
    assert_eq!(decrypted, message);

    Ok(())
}
