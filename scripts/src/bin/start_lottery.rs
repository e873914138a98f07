use scripts::{daemon::open_session, lottery::start_lottery};

pub fn main() -> anyhow::Result<()> {
    dotenv::dotenv()?;
    env_logger::init();
    let mut session = open_session()?;

    start_lottery(&mut session)?;

    Ok(())
}
