use std::error::Error;

use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None)]
pub struct Args {
    #[arg(env = "HOST", long, default_value_t = String::from("0.0.0.0"))]
    pub host: String,

    #[arg(env = "PORT", long, default_value_t = 3000)]
    pub port: u16,
}

impl Args {
    pub fn load() -> Result<Args, Box<dyn Error>> {
        // A missing .env file is fine; env vars and flags still apply.
        dotenvy::dotenv().ok();
        Ok(Args::parse())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_defaults() {
        let args = Args::parse_from(["greeting-api", "--host", "127.0.0.1", "--port", "8080"]);
        assert_eq!(args.host, "127.0.0.1");
        assert_eq!(args.port, 8080);
    }
}
