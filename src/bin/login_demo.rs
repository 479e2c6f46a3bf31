use fleetgate::application_impl::{Argon2PasswordHasher, FakeLoginService, RealLoginService};
use fleetgate::application_port::{LoginInput, LoginService, RequestState};
use fleetgate::infra_json::{JsonCredentialRepo, JsonDirectory, JsonVehicleRepo};
use fleetgate::logger::*;
use fleetgate::settings::*;
use std::sync::Arc;

/// Exercises the whole pipeline from the command line:
///
/// $ cargo run --bin login_demo -- --username d1 --password pw1
#[derive(Parser, Debug)]
struct DemoCli {
    #[command(flatten)]
    base: Cli,
    #[arg(long)]
    username: String,
    #[arg(long)]
    password: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = DemoCli::parse();

    let logger = Logger::new_bootstrap();
    let project_settings = parse_settings(cli.base.settings.as_deref())?;
    info!(?project_settings);
    logger.reload_from_config(&LogConfig {
        filter: project_settings.log.filter.clone(),
    })?;

    let service: Arc<dyn LoginService> = match project_settings.auth.backend.as_str() {
        "fake" => Arc::new(FakeLoginService::new()),
        _ => {
            let raw = std::fs::read_to_string(&project_settings.snapshot.path)?;
            let directory = Arc::new(JsonDirectory::from_json_str(&raw)?);
            info!(loaded_at = ?directory.loaded_at(), "snapshot loaded");
            Arc::new(RealLoginService::new(
                Arc::new(JsonCredentialRepo::new(directory.clone())),
                Arc::new(JsonVehicleRepo::new(directory)),
                Arc::new(Argon2PasswordHasher),
            ))
        }
    };

    let state = RequestState::Pending;
    info!(?state, "submitting login");

    let state = match service
        .login(LoginInput {
            username: cli.username,
            password: cli.password,
        })
        .await
    {
        Ok(view) => {
            println!("assigned schedule ({} day(s)):", view.len());
            for (day, waypoints) in &view {
                println!("  {day}:");
                for waypoint in waypoints {
                    println!(
                        "    {} ({:?}, {:?})",
                        waypoint.name.as_deref().unwrap_or("<unnamed>"),
                        waypoint.latitude,
                        waypoint.longitude
                    );
                }
            }
            RequestState::Success
        }
        Err(e) => {
            warn!("login failed: {e}");
            RequestState::Error
        }
    };

    info!(?state, "login finished");
    Ok(())
}
