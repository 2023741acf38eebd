use std::fmt;

/// Section of the admin page currently on screen. Any tab can be reached from any other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AdminTab {
    #[default]
    Dashboard,
    Bookings,
    Users,
    Reviews,
}

impl AdminTab {
    pub const ALL: [AdminTab; 4] = [
        AdminTab::Dashboard,
        AdminTab::Bookings,
        AdminTab::Users,
        AdminTab::Reviews,
    ];

    pub fn id(self) -> &'static str {
        match self {
            AdminTab::Dashboard => "dashboard",
            AdminTab::Bookings => "bookings",
            AdminTab::Users => "users",
            AdminTab::Reviews => "reviews",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            AdminTab::Dashboard => "Dashboard",
            AdminTab::Bookings => "Bookings",
            AdminTab::Users => "Users",
            AdminTab::Reviews => "Reviews",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            AdminTab::Dashboard => "▦",
            AdminTab::Bookings => "📅",
            AdminTab::Users => "👥",
            AdminTab::Reviews => "★",
        }
    }
}

impl fmt::Display for AdminTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}
