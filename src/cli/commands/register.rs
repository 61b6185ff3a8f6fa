use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::register::RegisterLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::user::NewUser;
use crate::ui::messages::success;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Register {
        username,
        password,
        confirm_password,
        first_name,
        last_name,
        role,
    } = cmd
    {
        let pool = DbPool::new(&cfg.database)?;

        let user = RegisterLogic::apply(
            &pool.conn,
            &NewUser {
                username: username.clone(),
                password: password.clone(),
                confirm_password: confirm_password.clone(),
                first_name: first_name.clone(),
                last_name: last_name.clone(),
                role: *role,
            },
        )?;

        success(format!(
            "Registered '{}' ({}, {}).",
            user.username,
            user.display_name(),
            user.role.to_db_str()
        ));
    }

    Ok(())
}
