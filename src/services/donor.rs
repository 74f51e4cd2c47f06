//! Donor service
//!
//! Business logic on top of the registry: resolving donors by name and
//! recording donations, with audit logging of every change. A change that
//! cannot be audited is still kept; the failure is only logged.

use crate::audit::{AuditEntry, AuditLogger};
use crate::error::MailroomResult;
use crate::models::{DonorId, Money};
use crate::registry::Registry;

/// Service for donor management
pub struct DonorService<'a> {
    registry: &'a mut Registry,
    audit: Option<&'a AuditLogger>,
}

impl<'a> DonorService<'a> {
    /// Create a new donor service
    pub fn new(registry: &'a mut Registry, audit: Option<&'a AuditLogger>) -> Self {
        Self { registry, audit }
    }

    /// Return the ID of the donor with this full name, creating the donor if
    /// nobody by that name exists yet
    pub fn resolve(&mut self, full_name: &str) -> MailroomResult<DonorId> {
        if let Some(donor) = self.registry.find_by_name(full_name) {
            tracing::debug!(donor = %donor.id, "resolved existing donor");
            return Ok(donor.id);
        }

        let id = self.registry.insert(full_name)?;
        tracing::info!(donor = %id, name = full_name, "created donor");

        if let (Some(audit), Some(donor)) = (self.audit, self.registry.get(id)) {
            audit.log_or_warn(&AuditEntry::donor_created(donor));
        }

        Ok(id)
    }

    /// Append a donation to a donor's history
    ///
    /// Zero input is refused when parsing, so the amount is recorded as is;
    /// a sub-cent gift arrives here as `Money::zero()`.
    pub fn record_donation(&mut self, id: DonorId, amount: Money) -> MailroomResult<Money> {
        let donor = self.registry.add_donation(id, amount)?;
        tracing::info!(donor = %id, amount = %amount, "recorded donation");

        if let Some(audit) = self.audit {
            audit.log_or_warn(&AuditEntry::donation_recorded(donor, amount));
        }

        Ok(amount)
    }

    /// Names of all donors in registry order
    pub fn names(&self) -> Vec<&str> {
        self.registry.names()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::Operation;
    use tempfile::TempDir;

    #[test]
    fn test_resolve_is_idempotent() {
        let mut registry = Registry::with_seed_donors();
        let mut service = DonorService::new(&mut registry, None);

        let first = service.resolve("Sterling Archer").unwrap();
        let second = service.resolve("Sterling Archer").unwrap();
        assert_eq!(first, second);
        assert_eq!(registry.len(), 6);
    }

    #[test]
    fn test_resolve_existing_donor() {
        let mut registry = Registry::with_seed_donors();
        let mut service = DonorService::new(&mut registry, None);

        let id = service.resolve("Ray Gillette").unwrap();
        assert_eq!(id, DonorId::new(5));
        assert_eq!(registry.len(), 5);
    }

    #[test]
    fn test_resolve_rejects_empty_name() {
        let mut registry = Registry::new();
        let mut service = DonorService::new(&mut registry, None);
        assert!(service.resolve("").unwrap_err().is_validation());
    }

    #[test]
    fn test_record_donations_in_order() {
        let mut registry = Registry::new();
        let mut service = DonorService::new(&mut registry, None);
        let id = service.resolve("Jane Doe").unwrap();

        let amounts = [250, 100, 75, 1000].map(Money::from_cents);
        for amount in amounts {
            service.record_donation(id, amount).unwrap();
        }

        assert_eq!(registry.get(id).unwrap().donations, amounts.to_vec());
    }

    #[test]
    fn test_record_donation_unknown_donor() {
        let mut registry = Registry::with_seed_donors();
        let mut service = DonorService::new(&mut registry, None);

        let err = service
            .record_donation(DonorId::new(42), Money::from_cents(100))
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_unwritable_audit_log_keeps_changes() {
        let temp_dir = TempDir::new().unwrap();
        let blocker = temp_dir.path().join("not-a-directory");
        std::fs::write(&blocker, "").unwrap();
        let logger = AuditLogger::new(blocker.join("audit.log"));
        let mut registry = Registry::with_seed_donors();

        {
            let mut service = DonorService::new(&mut registry, Some(&logger));
            let id = service.resolve("Sterling Archer").unwrap();
            service.record_donation(id, Money::from_cents(4200)).unwrap();
        }

        let archer = registry.get(DonorId::new(6)).unwrap();
        assert_eq!(archer.donations, vec![Money::from_cents(4200)]);
    }

    #[test]
    fn test_changes_are_audited() {
        let temp_dir = TempDir::new().unwrap();
        let logger = AuditLogger::new(temp_dir.path().join("audit.log"));
        let mut registry = Registry::with_seed_donors();

        {
            let mut service = DonorService::new(&mut registry, Some(&logger));
            let id = service.resolve("Sterling Archer").unwrap();
            service.record_donation(id, Money::from_cents(5000)).unwrap();
            service.resolve("Sterling Archer").unwrap();
        }

        let entries = logger.read_all().unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].operation, Operation::Create);
        assert_eq!(entries[1].operation, Operation::Donation);
        assert_eq!(entries[1].amount, Some(Money::from_cents(5000)));
    }
}
