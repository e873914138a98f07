use scripts::{daemon::open_session, lottery::enter_lottery};

pub fn main() -> anyhow::Result<()> {
    dotenv::dotenv()?;
    env_logger::init();
    let mut session = open_session()?;

    enter_lottery(&mut session)?;

    Ok(())
}
