//! Session service - the command-driven state machine
//!
//! The session holds the current authenticated user (or none) and
//! routes parsed commands to the credential store, the wallet, and the
//! slot game. `dispatch` is a pure command-processing step over the
//! session state: raw line in, user-facing reply out, no console I/O,
//! so the whole machine is testable without a terminal.

use rust_decimal::Decimal;

use crate::domain::result::Error;
use crate::domain::{Command, User, Withdrawal};
use crate::services::{AuthService, SlotGame, WalletService};

/// Banner printed once at startup
pub const WELCOME: &str = "Welcome and have fun!";
/// Prompt printed before each command
pub const PROMPT: &str = "\nPlease, submit action:";

const EXIT_MESSAGE: &str = "Thank you for playing! Hope to see you again soon!";
const NOT_LOGGED_IN: &str = "You must login first.";
const INSUFFICIENT_BALANCE: &str = "Insufficient balance. Deposit funds to continue playing.";
const MISSING_AMOUNT: &str = "An amount is required to complete this action.";
const MISSING_CREDENTIALS: &str = "Both username and password are required to proceed.";

const HELP_TEXT: &str = "
-------------------
Available Commands:

1. signup [username] [password]
   Registers a new user with the specified username and password.
   Example: signup myusername MyPassword123!

2. signin [username] [password]
   Logs in an existing user using the specified username and password.
   Example: signin myusername MyPassword123!

3. deposit [amount]
   Adds the specified amount of money to the wallet.
   You must be logged in to perform this action.
   Example: deposit 50.00

4. withdraw [amount]
   Withdraws the specified amount of money from the wallet.
   Requires login and must not exceed the available balance.
   Example: withdraw 20.00

5. bet [amount]
   Places a bet of the specified amount in the slot game.
   Requires login and sufficient balance.
   Example: bet 10.00

6. exit
   Terminates the application.
-------------------
";

/// Reply produced by one dispatched command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub message: String,
    pub halt: bool,
}

impl Reply {
    fn message(text: impl Into<String>) -> Self {
        Self {
            message: text.into(),
            halt: false,
        }
    }

    fn halt(text: impl Into<String>) -> Self {
        Self {
            message: text.into(),
            halt: true,
        }
    }
}

/// The per-process session state machine
pub struct Session {
    auth: AuthService,
    wallet: WalletService,
    game: SlotGame,
    user: Option<User>,
}

impl Session {
    pub fn new(auth: AuthService, wallet: WalletService, game: SlotGame) -> Self {
        Self {
            auth,
            wallet,
            game,
            user: None,
        }
    }

    /// The currently authenticated user, if any
    pub fn current_user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    /// Process one raw input line to completion
    ///
    /// Every failure is translated into a user-facing message here;
    /// nothing escapes to terminate the loop.
    pub fn dispatch(&mut self, input: &str) -> Reply {
        let command = match Command::parse(input) {
            Ok(command) => command,
            Err(err) => return Reply::message(err.to_string()),
        };

        match command.name.as_str() {
            "signup" => self.signup(&command.args),
            "signin" => self.signin(&command.args),
            "deposit" => self.deposit(&command.args),
            "withdraw" => self.withdraw(&command.args),
            "bet" => self.bet(&command.args),
            "exit" => Reply::halt(EXIT_MESSAGE),
            "help" => Reply::message(HELP_TEXT),
            other => Reply::message(format!(
                "The command '{other}' is not valid. Type 'help' to see available commands."
            )),
        }
    }

    fn signup(&mut self, args: &[String]) -> Reply {
        let Some((username, password)) = credentials(args) else {
            return Reply::message(MISSING_CREDENTIALS);
        };

        match self.auth.register(username, password) {
            Ok(user) => {
                self.wallet.create_wallet(user.id);
                let greeting = format!("Hello, {}. Enjoy the game!", user.name);
                self.user = Some(user);
                Reply::message(greeting)
            }
            Err(err) => Reply::message(auth_failure(err)),
        }
    }

    fn signin(&mut self, args: &[String]) -> Reply {
        let Some((username, password)) = credentials(args) else {
            return Reply::message(MISSING_CREDENTIALS);
        };

        match self.auth.login(username, password) {
            Ok(user) => {
                self.wallet.create_wallet(user.id);
                let greeting = format!("Hi, {}. Nice to see you again.", user.name);
                self.user = Some(user);
                Reply::message(greeting)
            }
            Err(err) => Reply::message(auth_failure(err)),
        }
    }

    fn deposit(&mut self, args: &[String]) -> Reply {
        let Some(user_id) = self.user.as_ref().map(|u| u.id) else {
            return Reply::message(NOT_LOGGED_IN);
        };
        let Some(amount) = parse_amount(args) else {
            return Reply::message(MISSING_AMOUNT);
        };

        match self.wallet.deposit(user_id, amount) {
            Ok(balance) => Reply::message(format!(
                "Your deposit of ${amount} was successful. Your current balance is: ${}",
                money(balance)
            )),
            Err(err) => Reply::message(wallet_failure(err)),
        }
    }

    fn withdraw(&mut self, args: &[String]) -> Reply {
        let Some(user_id) = self.user.as_ref().map(|u| u.id) else {
            return Reply::message(NOT_LOGGED_IN);
        };
        let Some(amount) = parse_amount(args) else {
            return Reply::message(MISSING_AMOUNT);
        };

        match self.wallet.withdraw(user_id, amount) {
            Ok(Withdrawal::Completed { balance }) => Reply::message(format!(
                "Your withdrawal of ${amount} was successful. Your current balance is: ${}",
                money(balance)
            )),
            Ok(Withdrawal::InsufficientFunds { balance }) => Reply::message(format!(
                "Cannot withdraw. The balance is {}.",
                money(balance)
            )),
            Err(err) => Reply::message(wallet_failure(err)),
        }
    }

    fn bet(&mut self, args: &[String]) -> Reply {
        let Some(user_id) = self.user.as_ref().map(|u| u.id) else {
            return Reply::message(NOT_LOGGED_IN);
        };
        let Some(amount) = parse_amount(args) else {
            return Reply::message(MISSING_AMOUNT);
        };

        // Reject non-positive bets before any ledger mutation; the
        // funds pre-check alone would wave a negative bet through.
        if amount <= Decimal::ZERO {
            return Reply::message(Error::InvalidBet(amount).to_string());
        }

        let balance = match self.wallet.balance(user_id) {
            Ok(balance) => balance,
            Err(err) => return Reply::message(wallet_failure(err)),
        };
        if balance < amount {
            return Reply::message(INSUFFICIENT_BALANCE);
        }

        // The bet is taken unconditionally once the pre-check passes;
        // a win credits the payout as a second settlement step.
        let debited = match self.wallet.adjust(user_id, -amount) {
            Ok(balance) => balance,
            Err(err) => return Reply::message(wallet_failure(err)),
        };

        let outcome = match self.game.spin(amount) {
            Ok(outcome) => outcome,
            Err(err) => {
                return Reply::message(format!("Game crashed! Please try again later. {err}"))
            }
        };

        if outcome.won {
            match self.wallet.adjust(user_id, outcome.amount) {
                Ok(balance) => Reply::message(format!(
                    "Congrats - you won ${}! Your current balance is: ${}",
                    money(outcome.amount),
                    money(balance)
                )),
                Err(err) => Reply::message(wallet_failure(err)),
            }
        } else {
            Reply::message(format!(
                "No luck this time! Your current balance is: ${}",
                money(debited)
            ))
        }
    }
}

fn credentials(args: &[String]) -> Option<(&str, &str)> {
    match args {
        [username, password] => Some((username, password)),
        _ => None,
    }
}

/// Parse the single amount argument; any shape or parse failure is a
/// missing-argument condition
fn parse_amount(args: &[String]) -> Option<Decimal> {
    match args {
        [raw] => raw.parse().ok(),
        _ => None,
    }
}

fn money(amount: Decimal) -> String {
    format!("{:.2}", amount.round_dp(2))
}

/// Translate credential-store failures into user-facing text
fn auth_failure(err: Error) -> String {
    match err {
        Error::Validation(_)
        | Error::DuplicateUsername(_)
        | Error::UnknownUser(_)
        | Error::WrongPassword
        | Error::Store(_)
        | Error::Io(_)
        | Error::Json(_) => err.to_string(),
        other => format!("An unexpected error occurred during authentication: {other}"),
    }
}

/// Translate ledger failures into user-facing text
fn wallet_failure(err: Error) -> String {
    match err {
        Error::InvalidAmount(_) | Error::WalletNotFound(_) => err.to_string(),
        other => format!("Oops! {other}"),
    }
}
