use age_verifier::{AgeVerifierClient, AgeVerifierError, ClientConfig, VerificationStatus};
use common::VerifierEnv;
use serde_json::Value;
use std::process::ExitCode;
use tracing::{error, info};

const USAGE: &str = "usage: age-verifier-cli <command> [args]

commands:
  need <client-ip> <user-id>
  start <session-id> <client-ip> [user-id]
  result <session-id>
  update <session-id> <user-id>";

/// A single API call requested on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Command {
    Need {
        client_ip: String,
        user_id: String,
    },
    Start {
        session_id: String,
        client_ip: String,
        user_id: Option<String>,
    },
    Result {
        session_id: String,
    },
    Update {
        session_id: String,
        user_id: String,
    },
}

impl Command {
    fn parse(args: &[String]) -> Option<Self> {
        let args: Vec<&str> = args.iter().map(String::as_str).collect();
        match args.as_slice() {
            ["need", client_ip, user_id] => Some(Self::Need {
                client_ip: client_ip.to_string(),
                user_id: user_id.to_string(),
            }),
            ["start", session_id, client_ip] => Some(Self::Start {
                session_id: session_id.to_string(),
                client_ip: client_ip.to_string(),
                user_id: None,
            }),
            ["start", session_id, client_ip, user_id] => Some(Self::Start {
                session_id: session_id.to_string(),
                client_ip: client_ip.to_string(),
                user_id: Some(user_id.to_string()),
            }),
            ["result", session_id] => Some(Self::Result {
                session_id: session_id.to_string(),
            }),
            ["update", session_id, user_id] => Some(Self::Update {
                session_id: session_id.to_string(),
                user_id: user_id.to_string(),
            }),
            _ => None,
        }
    }

    async fn execute(&self, client: &AgeVerifierClient) -> Result<Value, AgeVerifierError> {
        match self {
            Self::Need { client_ip, user_id } => {
                client.need_verification(client_ip, user_id).await
            }
            Self::Start {
                session_id,
                client_ip,
                user_id,
            } => {
                client
                    .start_check_age_verification(session_id, client_ip, user_id.as_deref())
                    .await
            }
            Self::Result { session_id } => client.check_age_verification_result(session_id).await,
            Self::Update {
                session_id,
                user_id,
            } => client.update_verification_result(session_id, user_id).await,
        }
    }
}

fn build_client(env: VerifierEnv) -> Result<AgeVerifierClient, AgeVerifierError> {
    let mut config =
        ClientConfig::new(&env.api_url, env.api_id, env.api_key)?.with_scheme(env.scheme);
    if let Some(timeout) = env.timeout {
        config = config.with_timeout(timeout);
    }
    AgeVerifierClient::new(config)
}

#[tokio::main]
async fn main() -> ExitCode {
    common::init_logging();

    let args = std::env::args().skip(1).collect::<Vec<_>>();
    let Some(command) = Command::parse(&args) else {
        eprintln!("{}", USAGE);
        return ExitCode::from(2);
    };

    let env = match VerifierEnv::from_env() {
        Ok(env) => env,
        Err(e) => {
            error!(error = %e, "Invalid configuration");
            return ExitCode::FAILURE;
        }
    };

    let client = match build_client(env) {
        Ok(client) => client,
        Err(e) => {
            error!(error = %e, "Failed to create client");
            return ExitCode::FAILURE;
        }
    };

    info!(
        base_url = %client.config().base_url(),
        scheme = %client.config().scheme(),
        command = ?command,
        "Calling age verification API"
    );

    match command.execute(&client).await {
        Ok(response) => {
            if let Some(status) = VerificationStatus::from_response(&response) {
                info!(status = %status, "Verification status");
            }
            match serde_json::to_string_pretty(&response) {
                Ok(text) => println!("{}", text),
                Err(_) => println!("{}", response),
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(error = %e, "Request failed");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_need() {
        assert_eq!(
            Command::parse(&args(&["need", "127.0.0.1", "u-1"])),
            Some(Command::Need {
                client_ip: "127.0.0.1".into(),
                user_id: "u-1".into(),
            })
        );
    }

    #[test]
    fn test_parse_start_with_and_without_user() {
        assert_eq!(
            Command::parse(&args(&["start", "s-1", "10.0.0.1"])),
            Some(Command::Start {
                session_id: "s-1".into(),
                client_ip: "10.0.0.1".into(),
                user_id: None,
            })
        );
        assert_eq!(
            Command::parse(&args(&["start", "s-1", "10.0.0.1", "u-1"])),
            Some(Command::Start {
                session_id: "s-1".into(),
                client_ip: "10.0.0.1".into(),
                user_id: Some("u-1".into()),
            })
        );
    }

    #[test]
    fn test_parse_result_and_update() {
        assert_eq!(
            Command::parse(&args(&["result", "s-1"])),
            Some(Command::Result {
                session_id: "s-1".into()
            })
        );
        assert_eq!(
            Command::parse(&args(&["update", "s-1", "u-1"])),
            Some(Command::Update {
                session_id: "s-1".into(),
                user_id: "u-1".into(),
            })
        );
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert_eq!(Command::parse(&args(&[])), None);
        assert_eq!(Command::parse(&args(&["need", "127.0.0.1"])), None);
        assert_eq!(Command::parse(&args(&["delete", "s-1"])), None);
    }
}
