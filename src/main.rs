// =========================================================
// numcore — interactive demo
// Arbitrary-precision arithmetic, modular arithmetic and
// primality toolkit
// =========================================================

use numcore::{
    add, crt, cubic_residues, divide, euler_totient, extended_gcd, fast_mod_mul, fermat, gcd,
    generate_gost, generate_prime, generate_with_factorization, jacobi, legendre, mod_inverse,
    mod_pow, modular_sqrt, mul, prime_factors, quadratic_residues, solovay_strassen, sub,
    trial_division, BigInt, NumberError,
};
use rand_core::OsRng;
use std::io::{self, Write};

const RADIX: u32 = 10;

#[derive(Debug)]
enum AppError {
    Number(NumberError),
    Io(std::io::Error),
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Number(e) => write!(f, "Numeric error: {}", e),
            AppError::Io(e) => write!(f, "I/O error: {}", e),
        }
    }
}

impl From<NumberError> for AppError {
    fn from(e: NumberError) -> Self {
        AppError::Number(e)
    }
}

impl From<std::io::Error> for AppError {
    fn from(e: std::io::Error) -> Self {
        AppError::Io(e)
    }
}

fn main() {
    loop {
        afficher_menu();
        let choix = lire_ligne();

        let res = match choix.as_str() {
            "1" => demo_bigint(),
            "2" => demo_modarith(),
            "3" => demo_primality(),
            "4" => demo_gost(),
            "5" => {
                println!("\nGoodbye!\n");
                break;
            }
            _ => {
                println!("\nInvalid choice. Please pick 1-5.\n");
                continue;
            }
        };

        if let Err(e) = res {
            eprintln!("\n[ERROR] {}\n", e);
        }

        println!("\nPress Enter to continue...");
        let mut pause = String::new();
        io::stdin().read_line(&mut pause).ok();
    }
}

fn afficher_menu() {
    println!("\n╔═══════════════════════════════════════════════╗");
    println!("║   NUMCORE — MENU                              ║");
    println!("╚═══════════════════════════════════════════════╝");
    println!("\n  [1] Arbitrary-precision arithmetic (add/sub/mul/divide/gcd)");
    println!("  [2] Modular arithmetic (mod_pow, CRT, Legendre/Jacobi, sqrt)");
    println!("  [3] Primality tests and generation");
    println!("  [4] GOST R 34.10-94 cascade generation");
    println!("  [5] Quit\n");
    print!("Your choice: ");
    io::stdout().flush().ok();
}

fn lire_ligne() -> String {
    let mut input = String::new();
    io::stdin().read_line(&mut input).ok();
    input.trim().to_string()
}

fn demander(prompt: &str) -> Result<String, AppError> {
    print!("{prompt}");
    io::stdout().flush()?;
    Ok(lire_ligne())
}

fn demander_bigint(prompt: &str) -> Result<BigInt, AppError> {
    let s = demander(prompt)?;
    Ok(BigInt::parse(&s, RADIX)?)
}

fn demander_u32(prompt: &str, default: u32) -> Result<u32, AppError> {
    let s = demander(prompt)?;
    Ok(s.parse().unwrap_or(default))
}

fn demander_u64(prompt: &str, default: u64) -> Result<u64, AppError> {
    let s = demander(prompt)?;
    Ok(s.parse().unwrap_or(default))
}

// ─────────────────────────────────────────────────────────
// [1] Arbitrary-precision arithmetic
// ─────────────────────────────────────────────────────────

fn demo_bigint() -> Result<(), AppError> {
    println!("\n==============================================");
    println!("    Arbitrary-precision arithmetic");
    println!("==============================================");

    let a = demander_bigint("a = ")?;
    let b = demander_bigint("b = ")?;

    println!("\n  a + b = {}", add(&a, &b, RADIX)?.format(RADIX)?);
    println!("  a - b = {}", sub(&a, &b, RADIX)?.format(RADIX)?);
    println!("  a * b = {}", mul(&a, &b, RADIX)?.format(RADIX)?);

    match divide(&a, &b, RADIX) {
        Ok((q, r)) => println!("  a / b = {} remainder {}", q.format(RADIX)?, r.format(RADIX)?),
        Err(NumberError::DivisionByZero) => println!("  a / b = division by zero"),
        Err(e) => return Err(e.into()),
    }

    println!("  gcd(a, b) = {}", gcd(&a, &b).format(RADIX)?);
    let (d, x, y) = extended_gcd(&a, &b);
    println!(
        "  extended_gcd(a, b) = (d={}, x={}, y={})",
        d.format(RADIX)?,
        x.format(RADIX)?,
        y.format(RADIX)?
    );

    Ok(())
}

// ─────────────────────────────────────────────────────────
// [2] Modular arithmetic
// ─────────────────────────────────────────────────────────

fn demo_modarith() -> Result<(), AppError> {
    println!("\n==============================================");
    println!("    Modular arithmetic");
    println!("==============================================");

    let a = demander_bigint("a = ")?;
    let e = demander_bigint("exponent e = ")?;
    let m = demander_bigint("modulus m = ")?;

    println!("\n  a^e mod m = {}", mod_pow(&a, &e, &m)?.format(RADIX)?);

    if let Ok(inv) = mod_inverse(&a, &m) {
        println!("  a^-1 mod m (Fermat, m prime) = {}", inv.format(RADIX)?);
    }

    println!("  legendre(a, m) = {}", legendre(&a, &m)?);
    println!("  jacobi(a, m) = {}", jacobi(&a, &m)?);
    println!("  phi(m) = {}", euler_totient(&m)?.format(RADIX)?);
    println!("  prime_factors(m) = {:?}", prime_factors(&m)?.iter().map(|f| f.format(RADIX).unwrap()).collect::<Vec<_>>());

    let quad = quadratic_residues(&m)?;
    println!(
        "  quadratic residues mod m = {:?}",
        quad.iter().map(|r| r.format(RADIX).unwrap()).collect::<Vec<_>>()
    );
    let cubic = cubic_residues(&m)?;
    println!(
        "  cubic residues mod m = {:?}",
        cubic.iter().map(|r| r.format(RADIX).unwrap()).collect::<Vec<_>>()
    );

    println!("\n-- Chinese Remainder Theorem --");
    let count: usize = demander("How many congruences (a_i mod n_i)? ")?.parse().unwrap_or(0);
    let mut pairs = Vec::with_capacity(count);
    for i in 0..count {
        let ai = demander_bigint(&format!("  a_{i} = "))?;
        let ni = demander_bigint(&format!("  n_{i} = "))?;
        pairs.push((ai, ni));
    }
    if !pairs.is_empty() {
        let (x, n) = crt(&pairs)?;
        println!("  x = {} (mod {})", x.format(RADIX)?, n.format(RADIX)?);
    }

    println!("\n-- fast_mod_mul for moduli of shape 2^n +/- c --");
    let n_bits = demander_bigint("n (modulus = 2^n +/- c) = ")?;
    let c = demander_bigint("c = ")?;
    let sign = if demander("sign (+/-) = ")?.trim() == "-" { '-' } else { '+' };
    let x = demander_bigint("x = ")?;
    let y = demander_bigint("y = ")?;
    let (result, modulus) = fast_mod_mul(&x, &y, &n_bits, &c, sign)?;
    println!("  x*y mod (2^n {sign} c) = {} (modulus = {})", result.format(RADIX)?, modulus.format(RADIX)?);

    println!("\n-- modular_sqrt(c, p, q) --");
    let c = demander_bigint("c = ")?;
    let p = demander_bigint("p (prime, congruent to 3 mod 4) = ")?;
    let q = demander_bigint("q (prime, congruent to 3 mod 4) = ")?;
    let roots = modular_sqrt(&c, &p, &q)?;
    println!("  roots = {:?}", roots.iter().map(|r| r.format(RADIX).unwrap()).collect::<Vec<_>>());

    Ok(())
}

// ─────────────────────────────────────────────────────────
// [3] Primality tests and generation
// ─────────────────────────────────────────────────────────

fn demo_primality() -> Result<(), AppError> {
    println!("\n==============================================");
    println!("    Primality");
    println!("==============================================");

    let p = demander_bigint("candidate p = ")?;
    let k = demander_u32("rounds k = ", 20)?;
    let mut rng = OsRng;

    println!("\n  fermat(p, k) = {}", fermat(&p, k, &mut rng)?);
    println!("  solovay_strassen(p, k) = {}", solovay_strassen(&p, k, &mut rng)?);
    match trial_division(&p) {
        Ok(is_prime) => println!("  trial_division(p) = {is_prime}"),
        Err(e) => println!("  trial_division(p) = n/a ({e})"),
    }

    println!("\n-- generate_prime(bits, k) --");
    let bits = demander_u64("bit length = ", 32)?;
    let gen = generate_prime(&mut rng, bits, k)?;
    println!("  generated prime = {}", gen.format(RADIX)?);

    println!("\n-- generate_with_factorization(k, bits, h, w) --");
    let pool_size: usize = demander("small-prime pool size k = ")?.parse().unwrap_or(8);
    let small_bits = demander_u64("small-prime bit length = ", 12)?;
    let h: usize = demander("factors to combine h = ")?.parse().unwrap_or(3);
    let witnesses = demander_u32("witnesses w = ", 20)?;
    let cert = generate_with_factorization(&mut rng, pool_size, small_bits, h, witnesses)?;
    println!("  p = {}", cert.prime.format(RADIX)?);
    println!(
        "  factors of (p-1)/2 = {:?}",
        cert.factors.iter().map(|f| f.format(RADIX).unwrap()).collect::<Vec<_>>()
    );

    Ok(())
}

// ─────────────────────────────────────────────────────────
// [4] GOST R 34.10-94 cascade generation
// ─────────────────────────────────────────────────────────

fn demo_gost() -> Result<(), AppError> {
    println!("\n==============================================");
    println!("    GOST R 34.10-94 cascade generation");
    println!("==============================================");

    let bits = demander_u64("target bit length (>= 17) = ", 64)?;
    let mut rng = OsRng;
    let mut progress = |msg: &str, is_sub_step: bool| {
        if is_sub_step {
            println!("    {msg}");
        } else {
            println!("  {msg}");
        }
    };
    let p = generate_gost(&mut rng, bits, Some(&mut progress))?;
    println!("\n  generated prime ({} bits) = {}", p.bit_length()?, p.format(RADIX)?);

    Ok(())
}
