use clap::Subcommand;
use client::ApiClient;
use client::models::{CreateUser, UpdateUser, User};

use crate::output::{Table, confirm_or};

#[derive(Subcommand)]
pub enum UserCommands {
    /// List operator accounts
    List,
    /// Show one account
    Get { id: i64 },
    /// Create an operator account
    Create {
        #[arg(long)]
        username: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
        #[arg(long)]
        role: Option<String>,
    },
    /// Change account fields; only the flags given are sent
    Update {
        id: i64,
        #[arg(long)]
        username: Option<String>,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        password: Option<String>,
        #[arg(long)]
        role: Option<String>,
    },
    /// Soft-delete an account (reversible)
    Remove { id: i64 },
    /// Undo a soft-delete
    Restore { id: i64 },
    /// Permanently delete an account
    Delete { id: i64 },
}

pub async fn run(api: &ApiClient, command: UserCommands, yes: bool) -> anyhow::Result<()> {
    let users = api.users();

    match command {
        UserCommands::List => print_rows(&users.list().await?),
        UserCommands::Get { id } => {
            let user = users.get(id).await?;
            print_rows(std::slice::from_ref(&user));
        }
        UserCommands::Create {
            username,
            email,
            password,
            role,
        } => {
            users
                .create(&CreateUser {
                    username,
                    email,
                    password,
                    role,
                })
                .await?;
            tracing::info!("User created");
            print_rows(&users.list().await?);
        }
        UserCommands::Update {
            id,
            username,
            email,
            password,
            role,
        } => {
            users
                .update(
                    id,
                    &UpdateUser {
                        username,
                        email,
                        password,
                        role,
                    },
                )
                .await?;
            tracing::info!("User {} updated", id);
            print_rows(&users.list().await?);
        }
        UserCommands::Remove { id } => {
            if confirm_or(yes, "Soft-delete this account?")? {
                users.remove(id).await?;
                tracing::info!("User {} soft-deleted", id);
                print_rows(&users.list().await?);
            }
        }
        UserCommands::Restore { id } => {
            users.restore(id).await?;
            tracing::info!("User {} restored", id);
            print_rows(&users.list().await?);
        }
        UserCommands::Delete { id } => {
            if confirm_or(yes, "Permanently delete this account?")? {
                users.delete(id).await?;
                tracing::info!("User {} deleted", id);
                print_rows(&users.list().await?);
            }
        }
    }

    Ok(())
}

fn print_rows(rows: &[User]) {
    let mut table = Table::new(&["ID", "Username", "Email", "Role"]);
    for user in rows {
        table.row(vec![
            user.id.to_string(),
            user.username.clone(),
            user.email.clone(),
            user.role.clone().unwrap_or_default(),
        ]);
    }
    table.print();
}
