use scripts::{daemon::open_session, lottery::deploy_lottery};

pub fn main() -> anyhow::Result<()> {
    dotenv::dotenv()?;
    env_logger::init();
    let mut session = open_session()?;

    deploy_lottery(&mut session)?;

    Ok(())
}
