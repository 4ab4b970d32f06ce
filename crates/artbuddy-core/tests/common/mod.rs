use artbuddy_core::model::{
    Commission, CompletionStatus, Customer, Email, Fee, Feedback, ImagePath, Iteration,
    IterationDate, IterationDescription, Name, Phone, Tag, Title,
};
use artbuddy_core::ModelManager;

/// Customer with fixed contact details and no commissions
#[allow(dead_code)]
pub fn customer(name: &str) -> Customer {
    Customer::builder(
        Name::new(name).expect("valid name"),
        Phone::new("94351253").expect("valid phone"),
        Email::new("customer@example.com").expect("valid email"),
    )
    .build()
}

/// Customer carrying the given tags
#[allow(dead_code)]
pub fn tagged_customer(name: &str, tags: &[&str]) -> Customer {
    customer(name)
        .to_builder()
        .tags(tags.iter().map(|t| Tag::new(*t).expect("valid tag")))
        .build()
}

/// In-progress commission with a fixed fee and deadline
#[allow(dead_code)]
pub fn commission(title: &str) -> Commission {
    commission_with_fee(title, 50.0)
}

#[allow(dead_code)]
pub fn commission_with_fee(title: &str, fee: f64) -> Commission {
    Commission::builder(
        Title::new(title).expect("valid title"),
        Fee::new(fee).expect("valid fee"),
        "2024-06-30".parse().expect("valid deadline"),
        CompletionStatus::IN_PROGRESS,
    )
    .build()
}

#[allow(dead_code)]
pub fn completed_commission(title: &str) -> Commission {
    commission(title)
        .to_builder()
        .status(CompletionStatus::COMPLETED)
        .build()
}

#[allow(dead_code)]
pub fn iteration(date: &str, description: &str) -> Iteration {
    Iteration::new(
        date.parse::<IterationDate>().expect("valid date"),
        IterationDescription::new(description).expect("valid description"),
        ImagePath::new("images/sketch.png").expect("valid path"),
        Feedback::new("").expect("feedback accepts anything"),
    )
}

/// Model holding `names` as customers, in order, with nothing selected
#[allow(dead_code)]
pub fn model_with_customers(names: &[&str]) -> ModelManager {
    let mut model = ModelManager::default();
    for name in names {
        model.add_customer(customer(name)).expect("distinct names");
    }
    model
}

/// Model with `name` added and selected
#[allow(dead_code)]
pub fn model_with_active_customer(name: &str) -> ModelManager {
    let mut model = model_with_customers(&[name]);
    model.select_customer(&customer(name)).expect("customer exists");
    model
}
