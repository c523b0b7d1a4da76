pub mod classifier;
pub mod filter;

pub use classifier::{
    assess_recency, classify, is_overdue, overdue_cutoff, BadgeColor, DepositPolicy, LabelStyle,
    PaymentState, PaymentStatus, PAYMENT_WINDOW_DAYS,
};
pub use filter::OccupancyFilter;
