use algebra::{Modulus, Polynomial};
use lattice::{Lwe, PolynomialRing, RingArithmetic, ScalarRing};
use lwe_pkc::{
    ascii_to_bits, bits_to_ascii, EncryptionMode, LweConstParameters, LweEncryptor,
    LweParameters, LwePublicKey, LweSecretKey, PkcError, RlweConstParameters, RlweEncryptor,
    RlweParameters, RlwePublicKey, RlweSecretKey, LWE_DEMO_PARAMETERS,
    LWE_WEAKENED_DEMO_PARAMETERS, RLWE_DEMO_PARAMETERS,
};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

fn lwe_params(dimension: usize, modulus: u64, max_error: u64, list_size: usize) -> LweParameters {
    LweParameters::new(LweConstParameters {
        dimension,
        modulus,
        max_error,
        list_size,
    })
    .unwrap()
}

fn rlwe_params(
    message_length: usize,
    modulus: u64,
    max_error: u64,
    list_size: usize,
) -> RlweParameters {
    RlweParameters::new(RlweConstParameters {
        message_length,
        modulus,
        max_error,
        list_size,
        quotient: None,
    })
    .unwrap()
}

#[test]
fn test_lwe_pkc() {
    let mut rng = ChaCha20Rng::seed_from_u64(1);
    let params = LweParameters::new(LWE_DEMO_PARAMETERS).unwrap();

    let mut sk = LweSecretKey::new(&params, None, &mut rng).unwrap();
    let pk = sk.get_public_keys(&mut rng).unwrap();
    assert_eq!(pk.modulus(), 17);
    assert_eq!(pk.max_error(), 1);
    assert_eq!(pk.list_size(), 5);

    let encryptor = LweEncryptor::new(pk);
    for _ in 0..100 {
        let c = encryptor.encrypt_bit(1, &mut rng).unwrap();
        assert_eq!(sk.decrypt_bit(&c), Ok(1));

        let c = encryptor.encrypt_bit(0, &mut rng).unwrap();
        assert_eq!(sk.decrypt_bit(&c), Ok(0));
    }
}

#[test]
fn test_lwe_weakened_batch() {
    let mut rng = ChaCha20Rng::seed_from_u64(2);
    let params = LweParameters::new(LWE_WEAKENED_DEMO_PARAMETERS).unwrap();

    let mut sk = LweSecretKey::new(&params, None, &mut rng).unwrap();
    let pk = sk.get_public_keys(&mut rng).unwrap();

    let encryptor = LweEncryptor::with_mode(pk, EncryptionMode::Weakened);
    assert_eq!(encryptor.mode(), EncryptionMode::Weakened);

    for _ in 0..50 {
        let c = encryptor.encrypt_message(&[1, 1, 0], &mut rng).unwrap();
        assert_eq!(c.len(), 3);
        assert_eq!(sk.decrypt_message(&c).unwrap(), vec![1, 1, 0]);
    }
}

#[test]
fn test_lwe_text() {
    let mut rng = ChaCha20Rng::seed_from_u64(3);
    let params = LweParameters::new(LWE_WEAKENED_DEMO_PARAMETERS).unwrap();

    let mut sk = LweSecretKey::new(&params, None, &mut rng).unwrap();
    let pk = sk.get_public_keys(&mut rng).unwrap();

    let text = "Hello, lattice!";
    let bits = ascii_to_bits(text).unwrap();
    for encryptor in [
        LweEncryptor::new(pk.clone()),
        LweEncryptor::with_mode(pk, EncryptionMode::Weakened),
    ] {
        let c = encryptor.encrypt_message(&bits, &mut rng).unwrap();
        let decrypted = sk.decrypt_message(&c).unwrap();
        assert_eq!(bits_to_ascii(&decrypted).unwrap(), text);
    }
}

#[test]
fn test_rlwe_pkc() {
    let mut rng = ChaCha20Rng::seed_from_u64(4);
    let params = RlweParameters::new(RLWE_DEMO_PARAMETERS).unwrap();

    let mut sk = RlweSecretKey::new(&params, None, &mut rng).unwrap();
    let pk = sk.get_public_keys(&mut rng).unwrap();
    assert_eq!(pk.quotient().data(), &[1, 0, 0, 0, 1]);

    let encryptor = RlweEncryptor::new(pk);
    for message in [[0, 0, 1, 1], [1, 0, 1, 1], [0, 0, 0, 0], [1, 1, 1, 1], [0, 1, 0, 0]] {
        for _ in 0..25 {
            let c = encryptor.encrypt_message(&message, &mut rng).unwrap();
            assert_eq!(sk.decrypt_message(&c).unwrap(), message);
        }
    }
}

#[test]
fn test_rlwe_custom_quotient() {
    let mut rng = ChaCha20Rng::seed_from_u64(5);

    // x^4 + 2x + 3 and the non-monic 2x^4 + 1
    for quotient in [vec![3, 2, 0, 0, 1], vec![1, 0, 0, 0, 2]] {
        let params = RlweParameters::new(RlweConstParameters {
            quotient: Some(quotient.clone()),
            ..RLWE_DEMO_PARAMETERS
        })
        .unwrap();

        let mut sk = RlweSecretKey::new(&params, None, &mut rng).unwrap();
        let pk = sk.get_public_keys(&mut rng).unwrap();
        assert_eq!(pk.quotient().data(), quotient.as_slice());

        let encryptor = RlweEncryptor::new(pk);
        for _ in 0..25 {
            let message: Vec<u8> = (0..4).map(|_| rng.gen_range(0..=1)).collect();
            let c = encryptor.encrypt_message(&message, &mut rng).unwrap();
            assert_eq!(sk.decrypt_message(&c).unwrap(), message);
        }
    }
}

#[test]
fn test_rlwe_larger_ring() {
    let mut rng = ChaCha20Rng::seed_from_u64(6);
    let params = rlwe_params(64, 12289, 16, 32);

    let mut sk = RlweSecretKey::new(&params, None, &mut rng).unwrap();
    let encryptor = RlweEncryptor::new(sk.get_public_keys(&mut rng).unwrap());

    let message: Vec<u8> = (0..64).map(|_| rng.gen_range(0..=1)).collect();
    let c = encryptor.encrypt_message(&message, &mut rng).unwrap();
    assert_eq!(sk.decrypt_message(&c).unwrap(), message);
}

#[test]
fn test_non_determinism() {
    let mut rng = ChaCha20Rng::seed_from_u64(7);
    let params = lwe_params(16, 3329, 8, 64);

    let mut sk = LweSecretKey::new(&params, None, &mut rng).unwrap();
    let encryptor = LweEncryptor::new(sk.get_public_keys(&mut rng).unwrap());

    let c1 = encryptor.encrypt_bit(1, &mut rng).unwrap();
    let c2 = encryptor.encrypt_bit(1, &mut rng).unwrap();
    assert_ne!(c1, c2);
    assert_eq!(sk.decrypt_bit(&c1), Ok(1));
    assert_eq!(sk.decrypt_bit(&c2), Ok(1));
}

#[test]
fn test_public_key_is_cached() {
    let mut rng = ChaCha20Rng::seed_from_u64(8);
    let params = LweParameters::new(LWE_DEMO_PARAMETERS).unwrap();

    let mut sk = LweSecretKey::new(&params, None, &mut rng).unwrap();
    assert!(!sk.is_published());
    assert!(sk.published_key().is_none());

    let pk1 = sk.get_public_keys(&mut rng).unwrap();
    assert!(sk.is_published());
    let pk2 = sk.get_public_keys(&mut rng).unwrap();
    assert_eq!(pk1, pk2);
    assert_eq!(sk.published_key(), Some(&pk1));

    // the published equations are the sampled ones
    assert!(pk1.a_list().eq(sk.a_list().iter()));
}

#[test]
fn test_public_key_error_bound() {
    let mut rng = ChaCha20Rng::seed_from_u64(9);
    let params = lwe_params(8, 109, 4, 40);

    let mut sk = LweSecretKey::new(&params, None, &mut rng).unwrap();
    let pk = sk.get_public_keys(&mut rng).unwrap();
    let ring = sk.ring();

    for equation in pk.equations() {
        let ideal = ring.multiply(equation.a(), sk.secret()).unwrap();
        let e = ring.sub_evaluations(equation.b(), &ideal);
        assert!(e <= 4 || e >= 109 - 4, "e = {e}");
    }
}

#[test]
fn test_seeded_reproducibility() {
    let params = LweParameters::new(LWE_WEAKENED_DEMO_PARAMETERS).unwrap();

    let run = |seed: u64| {
        let mut rng = ChaCha20Rng::seed_from_u64(seed);
        let mut sk = LweSecretKey::new(&params, None, &mut rng).unwrap();
        let pk = sk.get_public_keys(&mut rng).unwrap();
        let c = LweEncryptor::new(pk.clone())
            .encrypt_message(&[1, 0, 1], &mut rng)
            .unwrap();
        (sk.secret().clone(), pk, c)
    };

    assert_eq!(run(10), run(10));
}

#[test]
fn test_supplied_secret() {
    let mut rng = ChaCha20Rng::seed_from_u64(11);
    let params = LweParameters::new(LWE_DEMO_PARAMETERS).unwrap();

    let secret = vec![3, 0, 16, 5, 9];
    let mut sk = LweSecretKey::new(&params, Some(secret.clone()), &mut rng).unwrap();
    assert_eq!(sk.secret(), &secret);

    let encryptor = LweEncryptor::new(sk.get_public_keys(&mut rng).unwrap());
    let c = encryptor.encrypt_bit(1, &mut rng).unwrap();
    assert_eq!(sk.decrypt_bit(&c), Ok(1));

    assert!(matches!(
        LweSecretKey::new(&params, Some(vec![1, 2, 3]), &mut rng),
        Err(PkcError::ParameterError(_))
    ));
    assert!(matches!(
        LweSecretKey::new(&params, Some(vec![1, 2, 3, 4, 17]), &mut rng),
        Err(PkcError::ParameterError(_))
    ));

    let params = RlweParameters::new(RLWE_DEMO_PARAMETERS).unwrap();
    let secret = Polynomial::new(vec![1, 104, 0, 7]);
    let sk = RlweSecretKey::new(&params, Some(secret.clone()), &mut rng).unwrap();
    assert_eq!(sk.secret(), &secret);
    assert!(matches!(
        RlweSecretKey::new(&params, Some(Polynomial::new(vec![1, 2])), &mut rng),
        Err(PkcError::ParameterError(_))
    ));
}

#[test]
fn test_noise_budget_degeneracy() {
    let mut rng = ChaCha20Rng::seed_from_u64(12);

    // 17 // 4 - 2 - 1 = 1, no two equations may be combined
    let params = lwe_params(5, 17, 2, 5);
    let mut sk = LweSecretKey::new(&params, None, &mut rng).unwrap();
    let pk = sk.get_public_keys(&mut rng).unwrap();

    let encryptor = LweEncryptor::new(pk.clone());
    assert!(matches!(
        encryptor.encrypt_bit(1, &mut rng),
        Err(PkcError::ParameterError(_))
    ));
    assert!(matches!(
        encryptor.encrypt_message(&[1, 0], &mut rng),
        Err(PkcError::ParameterError(_))
    ));

    // the fixed weight never fails the budget check
    let weakened = LweEncryptor::with_mode(pk, EncryptionMode::Weakened);
    assert!(weakened.encrypt_bit(1, &mut rng).is_ok());

    // 105 // 4 - 10 - 1 = 15 = 1 * 10 + 5
    let params = rlwe_params(4, 105, 10, 2);
    let mut sk = RlweSecretKey::new(&params, None, &mut rng).unwrap();
    let encryptor = RlweEncryptor::new(sk.get_public_keys(&mut rng).unwrap());
    assert!(matches!(
        encryptor.encrypt_message(&[1, 0, 1, 0], &mut rng),
        Err(PkcError::ParameterError(_))
    ));
}

#[test]
fn test_max_error_ceilings() {
    // 109 // 8 = 13
    assert!(LweParameters::new(LweConstParameters {
        max_error: 13,
        ..LWE_WEAKENED_DEMO_PARAMETERS
    })
    .is_ok());
    assert!(matches!(
        LweParameters::new(LweConstParameters {
            max_error: 14,
            ..LWE_WEAKENED_DEMO_PARAMETERS
        }),
        Err(PkcError::ParameterError(_))
    ));

    // 105 // 4 = 26
    assert!(RlweParameters::new(RlweConstParameters {
        max_error: 25,
        ..RLWE_DEMO_PARAMETERS
    })
    .is_ok());
    assert!(matches!(
        RlweParameters::new(RlweConstParameters {
            max_error: 26,
            ..RLWE_DEMO_PARAMETERS
        }),
        Err(PkcError::ParameterError(_))
    ));
}

#[test]
fn test_length_enforcement() {
    let mut rng = ChaCha20Rng::seed_from_u64(13);

    let params = RlweParameters::new(RLWE_DEMO_PARAMETERS).unwrap();
    let mut sk = RlweSecretKey::new(&params, None, &mut rng).unwrap();
    let encryptor = RlweEncryptor::new(sk.get_public_keys(&mut rng).unwrap());

    assert_eq!(
        encryptor.encrypt_message(&[1, 0, 1], &mut rng),
        Err(PkcError::LengthError {
            expected: 4,
            actual: 3
        })
    );
    assert_eq!(
        encryptor.encrypt_message(&[1, 0, 1, 0, 1], &mut rng),
        Err(PkcError::LengthError {
            expected: 4,
            actual: 5
        })
    );

    let short = Lwe::new(Polynomial::new(vec![1, 2]), Polynomial::new(vec![0, 0, 0, 0]));
    assert_eq!(
        sk.decrypt_message(&short),
        Err(PkcError::LengthError {
            expected: 4,
            actual: 2
        })
    );

    let params = LweParameters::new(LWE_DEMO_PARAMETERS).unwrap();
    let sk = LweSecretKey::new(&params, None, &mut rng).unwrap();
    assert_eq!(
        sk.decrypt_bit(&Lwe::new(vec![1, 2, 3, 4], 0)),
        Err(PkcError::LengthError {
            expected: 5,
            actual: 4
        })
    );
}

#[test]
fn test_invalid_bits() {
    let mut rng = ChaCha20Rng::seed_from_u64(14);

    let params = LweParameters::new(LWE_DEMO_PARAMETERS).unwrap();
    let mut sk = LweSecretKey::new(&params, None, &mut rng).unwrap();
    let encryptor = LweEncryptor::new(sk.get_public_keys(&mut rng).unwrap());
    assert_eq!(encryptor.encrypt_bit(2, &mut rng), Err(PkcError::InvalidBit(2)));
    assert_eq!(
        encryptor.encrypt_message(&[1, 0, 7], &mut rng),
        Err(PkcError::InvalidBit(7))
    );

    let params = RlweParameters::new(RLWE_DEMO_PARAMETERS).unwrap();
    let mut sk = RlweSecretKey::new(&params, None, &mut rng).unwrap();
    let encryptor = RlweEncryptor::new(sk.get_public_keys(&mut rng).unwrap());
    assert_eq!(
        encryptor.encrypt_message(&[1, 3, 0, 0], &mut rng),
        Err(PkcError::InvalidBit(3))
    );
}

#[test]
fn test_decrypt_reduces_ciphertext() {
    let mut rng = ChaCha20Rng::seed_from_u64(15);
    let params = LweParameters::new(LWE_WEAKENED_DEMO_PARAMETERS).unwrap();

    let mut sk = LweSecretKey::new(&params, None, &mut rng).unwrap();
    let encryptor = LweEncryptor::new(sk.get_public_keys(&mut rng).unwrap());

    let c = encryptor.encrypt_bit(1, &mut rng).unwrap();
    let (a, b) = c.into_parts();
    let shifted = Lwe::new(a.iter().map(|&x| x + 109).collect::<Vec<_>>(), b + 2 * 109);
    assert_eq!(sk.decrypt_bit(&shifted), Ok(1));
}

#[test]
fn test_public_key_from_lists() {
    let mut rng = ChaCha20Rng::seed_from_u64(16);
    let params = LweParameters::new(LWE_DEMO_PARAMETERS).unwrap();

    let mut sk = LweSecretKey::new(&params, None, &mut rng).unwrap();
    let pk = sk.get_public_keys(&mut rng).unwrap();

    let a_list: Vec<Vec<u64>> = pk.a_list().cloned().collect();
    let t_list: Vec<u64> = pk.t_list().copied().collect();

    let rebuilt = LwePublicKey::from_lists(a_list.clone(), t_list.clone(), 17, 1).unwrap();
    assert_eq!(rebuilt, pk);

    let c = LweEncryptor::new(rebuilt).encrypt_bit(1, &mut rng).unwrap();
    assert_eq!(sk.decrypt_bit(&c), Ok(1));

    assert_eq!(
        LwePublicKey::from_lists(a_list.clone(), t_list[..4].to_vec(), 17, 1),
        Err(PkcError::LengthError {
            expected: 5,
            actual: 4
        })
    );
    assert!(matches!(
        LwePublicKey::from_lists(a_list, t_list, 17, 3),
        Err(PkcError::ParameterError(_))
    ));
}

/// Builds a scalar public key whose equations carry no error at all.
fn noise_free_lwe_key(rng: &mut ChaCha20Rng) -> (LwePublicKey, ScalarRing, Vec<u64>) {
    let ring = ScalarRing::new(Modulus::new(109).unwrap(), 5);
    let secret: Vec<u64> = (0..5).map(|_| rng.gen_range(0..109)).collect();
    let a_list: Vec<Vec<u64>> = (0..8)
        .map(|_| (0..5).map(|_| rng.gen_range(0..109)).collect())
        .collect();
    let t_list: Vec<u64> = a_list
        .iter()
        .map(|a| ring.multiply(a, &secret).unwrap())
        .collect();
    let pk = LwePublicKey::from_lists(a_list, t_list, 109, 4).unwrap();
    (pk, ring, secret)
}

#[test]
fn test_scalar_extra_error_only_when_weakened() {
    let mut rng = ChaCha20Rng::seed_from_u64(17);
    let (pk, ring, secret) = noise_free_lwe_key(&mut rng);

    // 109 // 4 - 4 - 1 = 22 = 5 * 4 + 2, extra magnitudes in [0, 2)
    let budgeted = LweEncryptor::new(pk.clone());
    for _ in 0..200 {
        let c = budgeted.encrypt_bit(0, &mut rng).unwrap();
        let mask = ring.multiply(c.a(), &secret).unwrap();
        assert_eq!(ring.sub_evaluations(c.b(), &mask), 0);
    }

    let weakened = LweEncryptor::with_mode(pk, EncryptionMode::Weakened);
    let noisy = (0..200)
        .map(|_| {
            let c = weakened.encrypt_bit(0, &mut rng).unwrap();
            let mask = ring.multiply(c.a(), &secret).unwrap();
            ring.sub_evaluations(c.b(), &mask)
        })
        .inspect(|&e| assert!(e <= 1 || e == 108))
        .filter(|&e| e != 0)
        .count();
    assert!(noisy > 0);
}

#[test]
fn test_ring_extra_error_when_budgeted() {
    let mut rng = ChaCha20Rng::seed_from_u64(18);
    let ring = PolynomialRing::negacyclic(Modulus::new(109).unwrap(), 4).unwrap();
    let secret = Polynomial::new((0..4).map(|_| rng.gen_range(0..109)).collect());
    let a_list: Vec<Polynomial<u64>> = (0..3)
        .map(|_| Polynomial::new((0..4).map(|_| rng.gen_range(0..109)).collect()))
        .collect();
    let t_list: Vec<Polynomial<u64>> = a_list
        .iter()
        .map(|a| ring.multiply(a, &secret).unwrap())
        .collect();
    let pk = RlwePublicKey::from_lists(a_list, t_list, ring.quotient().clone(), 109, 4).unwrap();

    let encryptor = RlweEncryptor::new(pk);
    let mut noisy = 0;
    for _ in 0..50 {
        let c = encryptor.encrypt_message(&[0, 0, 0, 0], &mut rng).unwrap();
        let mask = ring.multiply(c.a(), &secret).unwrap();
        let error = ring.sub_evaluations(c.b(), &mask);
        for &e in error.data() {
            assert!(e <= 1 || e == 108);
            noisy += usize::from(e != 0);
        }
    }
    assert!(noisy > 0);
}

#[test]
fn test_many_equation_weights() {
    let mut rng = ChaCha20Rng::seed_from_u64(19);

    // error-free equations, every one of the q // 4 - 1 weights is drawn
    let params = lwe_params(4, 1 << 16, 0, 6);
    let mut sk = LweSecretKey::new(&params, None, &mut rng).unwrap();
    let encryptor = LweEncryptor::new(sk.get_public_keys(&mut rng).unwrap());

    for bit in [0, 1, 1, 0] {
        let c = encryptor.encrypt_bit(bit, &mut rng).unwrap();
        assert_eq!(sk.decrypt_bit(&c), Ok(bit));
    }
}

fn assert_send_sync<T: Send + Sync>() {}

#[test]
fn test_concurrent_encryption() {
    assert_send_sync::<LwePublicKey>();
    assert_send_sync::<RlwePublicKey>();
    assert_send_sync::<LweEncryptor>();
    assert_send_sync::<RlweEncryptor>();

    let mut rng = ChaCha20Rng::seed_from_u64(20);
    let params = RlweParameters::new(RLWE_DEMO_PARAMETERS).unwrap();
    let mut sk = RlweSecretKey::new(&params, None, &mut rng).unwrap();
    let pk = sk.get_public_keys(&mut rng).unwrap();
    let message = [1, 0, 1, 1];

    let ciphertexts: Vec<_> = std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4u64)
            .map(|i| {
                let encryptor = RlweEncryptor::new(pk.clone());
                scope.spawn(move || {
                    let mut rng = ChaCha20Rng::seed_from_u64(100 + i);
                    (0..8)
                        .map(|_| encryptor.encrypt_message(&message, &mut rng).unwrap())
                        .collect::<Vec<_>>()
                })
            })
            .collect();
        handles
            .into_iter()
            .flat_map(|handle| handle.join().unwrap())
            .collect()
    });

    assert_eq!(ciphertexts.len(), 32);
    for c in &ciphertexts {
        assert_eq!(sk.decrypt_message(c).unwrap(), message);
    }
    assert_eq!(sk.get_public_keys(&mut rng).unwrap(), pk);
}
