// Module declarations
pub mod bigint;
pub mod error;
pub mod modarith;
pub mod primality;
pub mod rng;

// Core BigInt type and the four basic operations
pub use bigint::{add, divide, extended_gcd, gcd, mul, sub, BigInt};

// Modular arithmetic
pub use modarith::{
    crt, cubic_residues, euler_totient, fast_mod_mul, jacobi, legendre, mod_inverse, mod_pow,
    modular_sqrt, prime_factors, quadratic_residues,
};

// Primality and prime generation
pub use primality::{
    fermat, generate_gost, generate_prime, generate_small_primes, generate_with_factorization,
    solovay_strassen, trial_division, PocklingtonCertificate,
};

// Centralized error type
pub use error::NumberError;
