mod fermat;
mod generation;
mod gost;
mod pocklington;
mod solovay_strassen;
mod trial_division;

pub use fermat::fermat;
pub use generation::{generate_prime, generate_small_primes};
pub use gost::generate_gost;
pub use pocklington::{generate_with_factorization, PocklingtonCertificate};
pub use solovay_strassen::solovay_strassen;
pub use trial_division::trial_division;
