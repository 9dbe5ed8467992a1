//! Interactive console session
//!
//! A `ConsoleSession` reads menu choices and operands line by line, calls the
//! ledger, and prints the outcome. It holds the currently logged-in user and
//! nothing else; all bookkeeping stays in the ledger.
//!
//! Ledger rejections and malformed operands are printed and the menu is shown
//! again. Only I/O failures end the session with an error. End of input ends
//! it cleanly.

use crate::console::menu::{GuestChoice, MemberChoice, GUEST_MENU, MEMBER_MENU};
use crate::core::LedgerService;
use crate::io::{format_amount, parse_amount, parse_id};
use crate::types::{LedgerError, User};
use std::io::{BufRead, Write};
use tracing::{debug, info, warn};

/// Whether the menu loop keeps going
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    Continue,
    Quit,
}

/// One run of the console menu loop
pub struct ConsoleSession<S, R, W> {
    ledger: S,
    input: R,
    output: W,
    current_user: Option<User>,
    scale: u32,
}

impl<S: LedgerService, R: BufRead, W: Write> ConsoleSession<S, R, W> {
    /// Create a session over `ledger`
    ///
    /// # Arguments
    ///
    /// * `ledger` - The ledger the session operates
    /// * `input` - Source of menu choices and operands, one per line
    /// * `output` - Where menus, prompts and results are written
    /// * `scale` - Decimal places for printed amounts
    pub fn new(ledger: S, input: R, output: W, scale: u32) -> Self {
        ConsoleSession {
            ledger,
            input,
            output,
            current_user: None,
            scale,
        }
    }

    /// Run the menu loop until the user exits or input ends
    ///
    /// # Errors
    ///
    /// Returns `IoError` if reading input or writing output fails.
    pub fn run(&mut self) -> Result<(), LedgerError> {
        info!("console session started");

        loop {
            let step = if self.current_user.is_some() {
                self.member_step()?
            } else {
                self.guest_step()?
            };
            if step == Step::Quit {
                break;
            }
        }

        self.output.flush()?;
        info!("console session ended");
        Ok(())
    }

    /// The user currently logged in, if any
    pub fn current_user(&self) -> Option<&User> {
        self.current_user.as_ref()
    }

    /// Give the ledger back, ending the session
    pub fn into_ledger(self) -> S {
        self.ledger
    }

    fn guest_step(&mut self) -> Result<Step, LedgerError> {
        write!(self.output, "{}", GUEST_MENU)?;
        let Some(line) = self.read_line()? else {
            return Ok(Step::Quit);
        };

        match GuestChoice::from_input(&line) {
            Some(GuestChoice::Register) => self.register(),
            Some(GuestChoice::Login) => self.login(),
            Some(GuestChoice::Exit) => {
                writeln!(self.output, "Exiting...")?;
                Ok(Step::Quit)
            }
            None => {
                writeln!(self.output, "Invalid choice.")?;
                Ok(Step::Continue)
            }
        }
    }

    /// Prompt for a username and a password
    fn read_credentials(&mut self) -> Result<Option<(String, String)>, LedgerError> {
        let Some(username) = self.prompt("Enter username: ")? else {
            return Ok(None);
        };
        let Some(password) = self.prompt("Enter password: ")? else {
            return Ok(None);
        };
        Ok(Some((username, password)))
    }

    fn register(&mut self) -> Result<Step, LedgerError> {
        let Some((username, password)) = self.read_credentials()? else {
            return Ok(Step::Quit);
        };

        match self.ledger.register_user(&username, &password) {
            Ok(user) => {
                info!(user = user.id, username = %user.username, "registered and logged in");
                self.current_user = Some(user);
                writeln!(self.output, "Registration successful.")?;
            }
            Err(e) => self.report(e)?,
        }
        Ok(Step::Continue)
    }

    fn login(&mut self) -> Result<Step, LedgerError> {
        let Some((username, password)) = self.read_credentials()? else {
            return Ok(Step::Quit);
        };

        match self.ledger.login_user(&username, &password) {
            Ok(user) => {
                info!(user = user.id, username = %user.username, "logged in");
                self.current_user = Some(user);
                writeln!(self.output, "Login successful.")?;
            }
            Err(e) => self.report(e)?,
        }
        Ok(Step::Continue)
    }

    fn member_step(&mut self) -> Result<Step, LedgerError> {
        write!(self.output, "{}", MEMBER_MENU)?;
        let Some(line) = self.read_line()? else {
            return Ok(Step::Quit);
        };

        let outcome = match MemberChoice::from_input(&line) {
            Some(MemberChoice::CreateAccount) => self.create_account(),
            Some(MemberChoice::Deposit) => self.deposit(),
            Some(MemberChoice::Withdraw) => self.withdraw(),
            Some(MemberChoice::Transfer) => self.transfer(),
            Some(MemberChoice::CheckBalance) => self.check_balance(),
            Some(MemberChoice::TransactionHistory) => self.history(),
            Some(MemberChoice::MyAccounts) => self.my_accounts(),
            Some(MemberChoice::Logout) => {
                if let Some(user) = self.current_user.take() {
                    info!(user = user.id, "logged out");
                }
                writeln!(self.output, "Logged out.")?;
                Ok(Step::Continue)
            }
            None => {
                writeln!(self.output, "Invalid choice.")?;
                Ok(Step::Continue)
            }
        };

        match outcome {
            Err(LedgerError::IoError { message }) => Err(LedgerError::IoError { message }),
            Err(e) => {
                self.report(e)?;
                Ok(Step::Continue)
            }
            ok => ok,
        }
    }

    fn create_account(&mut self) -> Result<Step, LedgerError> {
        let Some(owner) = self.current_user.as_ref().map(|user| user.id) else {
            return Ok(Step::Continue);
        };
        let account = self.ledger.create_account(owner);
        writeln!(self.output, "Account created. Account ID: {}", account.id)?;
        Ok(Step::Continue)
    }

    fn deposit(&mut self) -> Result<Step, LedgerError> {
        let Some(account) = self.prompt("Enter account ID: ")? else {
            return Ok(Step::Quit);
        };
        let Some(amount) = self.prompt("Enter amount to deposit: ")? else {
            return Ok(Step::Quit);
        };

        self.ledger
            .deposit(parse_id(&account)?, parse_amount(&amount)?)?;
        writeln!(self.output, "Deposit successful.")?;
        Ok(Step::Continue)
    }

    fn withdraw(&mut self) -> Result<Step, LedgerError> {
        let Some(account) = self.prompt("Enter account ID: ")? else {
            return Ok(Step::Quit);
        };
        let Some(amount) = self.prompt("Enter amount to withdraw: ")? else {
            return Ok(Step::Quit);
        };

        self.ledger
            .withdraw(parse_id(&account)?, parse_amount(&amount)?)?;
        writeln!(self.output, "Withdrawal successful.")?;
        Ok(Step::Continue)
    }

    fn transfer(&mut self) -> Result<Step, LedgerError> {
        let Some(from) = self.prompt("Enter source account ID: ")? else {
            return Ok(Step::Quit);
        };
        let Some(to) = self.prompt("Enter destination account ID: ")? else {
            return Ok(Step::Quit);
        };
        let Some(amount) = self.prompt("Enter amount to transfer: ")? else {
            return Ok(Step::Quit);
        };

        self.ledger
            .transfer(parse_id(&from)?, parse_id(&to)?, parse_amount(&amount)?)?;
        writeln!(self.output, "Transfer successful.")?;
        Ok(Step::Continue)
    }

    fn check_balance(&mut self) -> Result<Step, LedgerError> {
        let Some(account) = self.prompt("Enter account ID: ")? else {
            return Ok(Step::Quit);
        };

        let balance = self.ledger.check_balance(parse_id(&account)?)?;
        writeln!(
            self.output,
            "Current balance: {}",
            format_amount(balance, self.scale)
        )?;
        Ok(Step::Continue)
    }

    fn history(&mut self) -> Result<Step, LedgerError> {
        let Some(account) = self.prompt("Enter account ID: ")? else {
            return Ok(Step::Quit);
        };
        let account = parse_id(&account)?;

        writeln!(self.output, "Transaction history for account ID {}:", account)?;
        for tx in self.ledger.transaction_history(account) {
            writeln!(
                self.output,
                "{} - {}: {}",
                tx.timestamp.format("%Y-%m-%d %H:%M:%S UTC"),
                tx.kind,
                format_amount(tx.amount, self.scale)
            )?;
        }
        Ok(Step::Continue)
    }

    fn my_accounts(&mut self) -> Result<Step, LedgerError> {
        let Some(user) = self.current_user.clone() else {
            return Ok(Step::Continue);
        };

        let accounts = self.ledger.accounts_owned_by(user.id);
        if accounts.is_empty() {
            writeln!(self.output, "No accounts.")?;
            return Ok(Step::Continue);
        }

        writeln!(self.output, "Accounts for {}:", user.username)?;
        for account in accounts {
            writeln!(
                self.output,
                "{}: {}",
                account.id,
                format_amount(account.balance, self.scale)
            )?;
        }
        Ok(Step::Continue)
    }

    /// Print a prompt without a newline and read the answer
    fn prompt(&mut self, label: &str) -> Result<Option<String>, LedgerError> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;
        self.read_line()
    }

    /// Read one line without its terminator; `None` at end of input
    fn read_line(&mut self) -> Result<Option<String>, LedgerError> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }

    /// Print a failed operation's message and log it
    fn report(&mut self, error: LedgerError) -> Result<(), LedgerError> {
        if error.is_rejection() {
            warn!(error = %error, "operation rejected");
        } else {
            debug!(error = %error, "invalid console input");
        }
        writeln!(self.output, "{}", error)?;
        Ok(())
    }
}
