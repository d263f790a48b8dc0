#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    FoodAndDining,
    Transportation,
    Housing,
    Entertainment,
    PersonalCare,
    Education,
    Travel,
    Shopping,
    DebtAndLoans,
    SavingsAndInvestments,
    Miscellaneous,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FoodAndDining => "Food & Dining",
            Self::Transportation => "Transportation",
            Self::Housing => "Housing",
            Self::Entertainment => "Entertainment",
            Self::PersonalCare => "Personal Care",
            Self::Education => "Education",
            Self::Travel => "Travel",
            Self::Shopping => "Shopping",
            Self::DebtAndLoans => "Debt & Loans",
            Self::SavingsAndInvestments => "Savings & Investments",
            Self::Miscellaneous => "Miscellaneous",
        }
    }

    /// Case-insensitive lookup by display name. Surrounding whitespace is ignored.
    pub fn parse(s: &str) -> Option<Self> {
        let wanted = s.trim().to_lowercase();
        Self::all()
            .iter()
            .copied()
            .find(|c| c.as_str().to_lowercase() == wanted)
    }

    /// Fixed enumeration order. Budget-vs-actual rows follow it.
    pub fn all() -> &'static [Category] {
        &[
            Self::FoodAndDining,
            Self::Transportation,
            Self::Housing,
            Self::Entertainment,
            Self::PersonalCare,
            Self::Education,
            Self::Travel,
            Self::Shopping,
            Self::DebtAndLoans,
            Self::SavingsAndInvestments,
            Self::Miscellaneous,
        ]
    }

    /// Split a leading category name off `input`, returning the category and the
    /// trimmed remainder. The longest matching name wins and must end on a word
    /// boundary, so `"Travel plans"` matches but `"Travelling"` does not.
    pub fn split_prefix(input: &str) -> Option<(Self, &str)> {
        let input = input.trim_start();
        let mut best: Option<(Self, usize)> = None;

        for cat in Self::all() {
            let name = cat.as_str();
            let Some(head) = input.get(..name.len()) else {
                continue;
            };
            if !head.eq_ignore_ascii_case(name) {
                continue;
            }
            let at_boundary = input[name.len()..]
                .chars()
                .next()
                .map_or(true, char::is_whitespace);
            if at_boundary && best.map_or(true, |(_, len)| name.len() > len) {
                best = Some((*cat, name.len()));
            }
        }

        best.map(|(cat, len)| (cat, input[len..].trim()))
    }

    /// Next category in enumeration order, wrapping around.
    pub fn next(self) -> Self {
        let all = Self::all();
        let idx = all.iter().position(|c| *c == self).unwrap_or(0);
        all[(idx + 1) % all.len()]
    }

    /// Previous category in enumeration order, wrapping around.
    pub fn prev(self) -> Self {
        let all = Self::all();
        let idx = all.iter().position(|c| *c == self).unwrap_or(0);
        all[(idx + all.len() - 1) % all.len()]
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
