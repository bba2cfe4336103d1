use clap::Parser;
use std::net::SocketAddr;

/// Bank account and transaction HTTP API
#[derive(Parser, Debug)]
#[command(name = "bank-engine")]
#[command(about = "Bank account and transaction HTTP API", long_about = None)]
pub struct CliArgs {
    /// Socket address to listen on
    #[arg(
        long = "listen",
        value_name = "ADDR",
        env = "BANK_LISTEN",
        default_value = "0.0.0.0:8080"
    )]
    pub listen: SocketAddr,

    /// Tracing filter directive (e.g. "info" or "bank_engine=debug")
    #[arg(
        long = "log-filter",
        value_name = "FILTER",
        env = "BANK_LOG",
        default_value = "info"
    )]
    pub log_filter: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_defaults() {
        let args = CliArgs::try_parse_from(["bank-engine"]).unwrap();
        assert_eq!(args.listen, "0.0.0.0:8080".parse().unwrap());
        assert_eq!(args.log_filter, "info");
    }

    #[rstest]
    #[case::loopback("127.0.0.1:9000")]
    #[case::any_port("0.0.0.0:0")]
    fn test_listen_flag(#[case] addr: &str) {
        let args = CliArgs::try_parse_from(["bank-engine", "--listen", addr]).unwrap();
        assert_eq!(args.listen, addr.parse().unwrap());
    }

    #[test]
    fn test_invalid_listen_address_is_rejected() {
        let result = CliArgs::try_parse_from(["bank-engine", "--listen", "not-an-addr"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_log_filter_flag() {
        let args =
            CliArgs::try_parse_from(["bank-engine", "--log-filter", "bank_engine=debug"]).unwrap();
        assert_eq!(args.log_filter, "bank_engine=debug");
    }
}
