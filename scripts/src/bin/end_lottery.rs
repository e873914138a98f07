use scripts::{daemon::open_session, lottery::end_lottery};

pub fn main() -> anyhow::Result<()> {
    dotenv::dotenv()?;
    env_logger::init();
    let mut session = open_session()?;

    end_lottery(&mut session)?;

    Ok(())
}
