use crate::commands::Commands;
use crate::console::{Console, ProfilePrinter};
use crate::error::{CliError, Result as CliErrorResult};

use al_account::{AccountService, AccountSettings};
use al_config::Config;
use al_identity::{IdentityService, InMemoryIdentityService, RestIdentityService};
use al_store::{DocumentStore, InMemoryDocumentStore, RestDocumentStore};

use std::sync::Arc;

use log::info;

pub(crate) const REGISTERED_TEXT: &str = "Регистрация прошла успешно!";
pub(crate) const LOGGED_IN_TEXT: &str = "Вход выполнен успешно!";
pub(crate) const LOGGED_OUT_TEXT: &str = "Вы вышли из аккаунта.";

pub(crate) type Accounts = AccountService<dyn IdentityService, dyn DocumentStore>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Outcome {
    Success,
    Failure,
}

/// Process-local services; state lives only as long as the process.
pub(crate) fn offline_accounts(settings: AccountSettings) -> Accounts {
    let identity: Arc<dyn IdentityService> = Arc::new(InMemoryIdentityService::new());
    let store: Arc<dyn DocumentStore> = Arc::new(InMemoryDocumentStore::new());
    AccountService::new(identity, store, settings)
}

pub(crate) fn remote_accounts(config: &Config) -> CliErrorResult<Accounts> {
    config.validate_remote()?;

    let identity = RestIdentityService::from_config(&config.identity)
        .map_err(|e| CliError::setup(e.message()))?;
    let store =
        RestDocumentStore::from_config(&config.store).map_err(|e| CliError::setup(e.message()))?;

    let identity: Arc<dyn IdentityService> = Arc::new(identity);
    let store: Arc<dyn DocumentStore> = Arc::new(store);
    Ok(AccountService::new(
        identity,
        store,
        AccountSettings::from_config(config),
    ))
}

pub(crate) async fn run(accounts: &Accounts, command: Commands, console: &Console) -> Outcome {
    match command {
        Commands::Register {
            name,
            email,
            password,
        } => register(accounts, &name, &email, &password, console).await,
        Commands::Login { email, password } => login(accounts, &email, &password, console).await,
        Commands::Profile { email, password } => {
            profile(accounts, &email, &password, console).await
        }
        Commands::Demo {
            name,
            email,
            password,
        } => {
            if register(accounts, &name, &email, &password, console).await == Outcome::Failure {
                return Outcome::Failure;
            }
            profile(accounts, &email, &password, console).await
        }
    }
}

async fn register(
    accounts: &Accounts,
    name: &str,
    email: &str,
    password: &str,
    console: &Console,
) -> Outcome {
    match accounts.register(name, email, password).await {
        Ok(()) => {
            console.say(REGISTERED_TEXT);
            Outcome::Success
        }
        Err(e) => {
            console.complain(e.user_message());
            Outcome::Failure
        }
    }
}

async fn login(accounts: &Accounts, email: &str, password: &str, console: &Console) -> Outcome {
    match accounts.login(email, password).await {
        Ok(_) => {
            console.say(LOGGED_IN_TEXT);
            Outcome::Success
        }
        Err(e) => {
            console.complain(e.user_message());
            Outcome::Failure
        }
    }
}

async fn profile(accounts: &Accounts, email: &str, password: &str, console: &Console) -> Outcome {
    let session = match accounts.login(email, password).await {
        Ok(session) => session,
        Err(e) => {
            console.complain(e.user_message());
            return Outcome::Failure;
        }
    };
    console.say(LOGGED_IN_TEXT);

    let printer = ProfilePrinter::new(console);
    accounts.deliver_profile(&session, &printer).await;

    info!("Profile shown for {}", session.uid());
    accounts.logout(session);
    console.say(LOGGED_OUT_TEXT);

    if printer.failed() {
        Outcome::Failure
    } else {
        Outcome::Success
    }
}
