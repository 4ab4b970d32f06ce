use crate::manager::ModelManager;
use crate::model::{Name, Title};
use crate::ops::Store;

/// A broken link between the selection slots and the store
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionViolation {
    /// The active customer key names no stored customer
    MissingActiveCustomer(Name),
    /// A commission is active while no customer is
    CommissionWithoutCustomer(Title),
    /// The active commission is not in the active customer's list
    CommissionNotOwned { customer: Name, commission: Title },
}

/// Find commissions whose owner key disagrees with the list holding them
///
/// Returns list of (customer name, commission title) tuples
pub fn find_owner_mismatches(store: &Store) -> Vec<(Name, Title)> {
    let mut mismatches = Vec::new();

    for customer in store.customers() {
        for commission in customer.commissions() {
            if !commission.is_owned_by(customer.name()) {
                mismatches.push((customer.name().clone(), commission.title().clone()));
            }
        }
    }

    mismatches
}

/// Find every way the selection slots fail to point into the store
pub fn find_selection_violations(model: &ModelManager) -> Vec<SelectionViolation> {
    let mut violations = Vec::new();
    let customer = model.active_customer_key();
    let commission = model.active_commission_key();

    match (customer, commission) {
        (None, Some(title)) => {
            violations.push(SelectionViolation::CommissionWithoutCustomer(title.clone()));
        }
        (Some(name), commission) => match model.store().customer(name) {
            None => violations.push(SelectionViolation::MissingActiveCustomer(name.clone())),
            Some(active) => {
                if let Some(title) = commission {
                    if active.commission(title).is_none() {
                        violations.push(SelectionViolation::CommissionNotOwned {
                            customer: name.clone(),
                            commission: title.clone(),
                        });
                    }
                }
            }
        },
        (None, None) => {}
    }

    violations
}

/// True if the model passes every structural check
pub fn is_consistent(model: &ModelManager) -> bool {
    find_owner_mismatches(model.store()).is_empty() && find_selection_violations(model).is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Commission, CompletionStatus, Customer, Email, Fee, Phone};

    fn customer(name: &str) -> Customer {
        Customer::builder(
            Name::new(name).unwrap(),
            Phone::new("555").unwrap(),
            Email::new("x@example.com").unwrap(),
        )
        .build()
    }

    fn commission(title: &str) -> Commission {
        Commission::builder(
            Title::new(title).unwrap(),
            Fee::new(10.0).unwrap(),
            "2024-01-01".parse().unwrap(),
            CompletionStatus::IN_PROGRESS,
        )
        .build()
    }

    #[test]
    fn test_store_built_through_api_has_no_mismatches() {
        let mut store = Store::new();
        store.add_customer(customer("Alice")).unwrap();
        let alice = Name::new("Alice").unwrap();
        store.add_commission(&alice, commission("Portrait")).unwrap();

        let renamed = store
            .customer(&alice)
            .unwrap()
            .to_builder()
            .name(Name::new("Alicia").unwrap())
            .build();
        store.set_customer(&customer("Alice"), renamed).unwrap();

        assert!(find_owner_mismatches(&store).is_empty());
    }

    #[test]
    fn test_fresh_model_is_consistent() {
        let mut model = ModelManager::default();
        let alice = customer("Alice");
        model.add_customer(alice.clone()).unwrap();
        model.select_customer(&alice).unwrap();
        model.add_commission(commission("Portrait")).unwrap();
        model.select_commission(&commission("Portrait")).unwrap();

        assert!(find_selection_violations(&model).is_empty());
        assert!(is_consistent(&model));
    }
}
