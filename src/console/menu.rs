//! Console menus
//!
//! Two numbered menus: one shown while nobody is logged in, one for a
//! logged-in user. Choices are typed as their number.

/// Menu shown while nobody is logged in
pub const GUEST_MENU: &str = "1. Register\n2. Login\n3. Exit\n";

/// Menu shown to a logged-in user
pub const MEMBER_MENU: &str = "1. Create Account\n\
                               2. Deposit\n\
                               3. Withdraw\n\
                               4. Transfer\n\
                               5. Check Balance\n\
                               6. Transaction History\n\
                               7. Logout\n\
                               8. My Accounts\n";

/// Choices on the logged-out menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuestChoice {
    Register,
    Login,
    Exit,
}

impl GuestChoice {
    /// Parse a typed menu number; anything unrecognized is `None`
    pub fn from_input(text: &str) -> Option<Self> {
        match text.trim() {
            "1" => Some(GuestChoice::Register),
            "2" => Some(GuestChoice::Login),
            "3" => Some(GuestChoice::Exit),
            _ => None,
        }
    }
}

/// Choices on the logged-in menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemberChoice {
    CreateAccount,
    Deposit,
    Withdraw,
    Transfer,
    CheckBalance,
    TransactionHistory,
    Logout,
    MyAccounts,
}

impl MemberChoice {
    /// Parse a typed menu number; anything unrecognized is `None`
    pub fn from_input(text: &str) -> Option<Self> {
        match text.trim() {
            "1" => Some(MemberChoice::CreateAccount),
            "2" => Some(MemberChoice::Deposit),
            "3" => Some(MemberChoice::Withdraw),
            "4" => Some(MemberChoice::Transfer),
            "5" => Some(MemberChoice::CheckBalance),
            "6" => Some(MemberChoice::TransactionHistory),
            "7" => Some(MemberChoice::Logout),
            "8" => Some(MemberChoice::MyAccounts),
            _ => None,
        }
    }
}
