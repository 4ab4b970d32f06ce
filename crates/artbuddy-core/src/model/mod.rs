mod value;

pub mod commission;
pub mod commission_fields;
pub mod customer;
pub mod customer_fields;
pub mod iteration;
pub mod unique_list;

pub use commission::{Commission, CommissionBuilder};
pub use commission_fields::{CompletionStatus, Deadline, Description, Fee, Title};
pub use customer::{Customer, CustomerBuilder};
pub use customer_fields::{Address, Email, Name, Phone, Tag};
pub use iteration::{Feedback, ImagePath, Iteration, IterationDate, IterationDescription};
pub use unique_list::{EntityKind, SameIdentity, UniqueEntityList};
