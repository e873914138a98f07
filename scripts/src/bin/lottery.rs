use scripts::{daemon::open_session, lottery::run};

/// Deploys a lottery and plays one round: start, enter, end.
pub fn main() -> anyhow::Result<()> {
    dotenv::dotenv()?;
    env_logger::init();
    let mut session = open_session()?;

    if let Some(winner) = run(&mut session)? {
        println!("{winner}");
    }

    Ok(())
}
