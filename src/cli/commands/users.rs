use crate::config::Config;
use crate::db::pool::DbPool;
use crate::db::users::load_users;
use crate::errors::AppResult;
use crate::ui::messages::info;
use crate::utils::table::Table;

pub fn handle(cfg: &Config) -> AppResult<()> {
    let pool = DbPool::new(&cfg.database)?;
    let users = load_users(&pool.conn)?;

    if users.is_empty() {
        info("No users registered.");
        return Ok(());
    }

    let mut table = Table::new(&["USERNAME", "NAME", "ROLE"]);
    for u in &users {
        table.add_row(vec![
            u.username.clone(),
            u.display_name(),
            u.role.to_db_str().to_string(),
        ]);
    }
    print!("{}", table.render());

    Ok(())
}
