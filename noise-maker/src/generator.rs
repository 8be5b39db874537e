use chrono::Local;
use rand::{Rng, seq::IndexedRandom};

const METHODS: [(&str, u8); 6] = [
    ("GET", 30),
    ("POST", 8),
    ("PUT", 2),
    ("DELETE", 1),
    ("HEAD", 2),
    ("OPTIONS", 1),
];
const PATHS: [(&str, u8); 6] = [
    ("/", 10),
    ("/login", 10),
    ("/api", 50),
    ("/admin", 5),
    ("/downloads/product_1", 20),
    ("/gallery", 10),
];
const STATUS: [(u16, u8); 7] = [
    (200, 50),
    (201, 10),
    (304, 15),
    (400, 10),
    (401, 20),
    (404, 50),
    (500, 5),
];
const REFERRERS: [(&str, u8); 3] = [
    ("-", 20),
    ("https://example.com/", 5),
    ("https://search.example.org/?q=products", 2),
];
const USER_AGENTS: [(&str, u8); 5] = [
    (
        "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/126.0 Safari/537.36",
        30,
    ),
    (
        "Mozilla/5.0 (Macintosh; Intel Mac OS X 14_5) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/17.5 Safari/605.1.15",
        15,
    ),
    ("Debian APT-HTTP/1.3 (1.0.1ubuntu2)", 10),
    ("curl/8.5.0", 5),
    ("Wget/1.21.4", 2),
];

fn pick<'a, T, R: Rng + ?Sized>(rng: &mut R, table: &'a [(T, u8)]) -> &'a T {
    &table
        .choose_weighted(rng, |(_, w)| *w)
        .expect("weighted table is non-empty")
        .0
}

pub fn generate_combined_log<R: Rng + ?Sized>(rng: &mut R) -> String {
    let ip = format!(
        "192.168.{}.{}",
        rng.random_range(0..256),
        rng.random_range(0..256)
    );
    let timestamp = Local::now().format("%d/%b/%Y:%H:%M:%S %z");
    let method = pick(rng, &METHODS);
    let path = pick(rng, &PATHS);
    let status = pick(rng, &STATUS);
    let size = rng.random_range(100..2000);
    let referrer = pick(rng, &REFERRERS);
    let agent = pick(rng, &USER_AGENTS);

    format!(
        "{ip} - - [{timestamp}] \"{method} {path} HTTP/1.1\" {status} {size} \"{referrer}\" \"{agent}\""
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn line_has_quoted_request_referrer_and_agent() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..100 {
            let line = generate_combined_log(&mut rng);
            assert_eq!(line.matches('"').count(), 6, "unexpected quoting in {line}");
            assert!(line.starts_with("192.168."));
            assert!(USER_AGENTS.iter().any(|(a, _)| line.ends_with(&format!("\"{a}\""))));
        }
    }

    #[test]
    fn every_method_is_eventually_generated() {
        let mut rng = StdRng::seed_from_u64(42);
        let lines: Vec<_> = (0..5000).map(|_| generate_combined_log(&mut rng)).collect();
        for (method, _) in METHODS {
            assert!(
                lines.iter().any(|l| l.contains(&format!("\"{method} "))),
                "{method} never generated"
            );
        }
    }
}
