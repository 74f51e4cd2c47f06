//! In-memory donor registry
//!
//! Holds every donor known to the current session in the order they were
//! added. Nothing is persisted; a fresh registry starts from the seed donors.

use crate::error::{MailroomError, MailroomResult};
use crate::models::{Donor, DonorId, Money};

/// The collection of all donors for a session
#[derive(Debug, Clone, Default)]
pub struct Registry {
    donors: Vec<Donor>,
}

impl Registry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry populated with the starting donors
    pub fn with_seed_donors() -> Self {
        let seeds: [(&str, &[Money]); 5] = [
            ("Lana Kane", &[Money::from_dollars_cents(2999, 99)]),
            (
                "Cheryl Tunt",
                &[
                    Money::from_dollars_cents(150, 20),
                    Money::from_dollars_cents(98192, 10),
                ],
            ),
            (
                "Cyril Figgis",
                &[
                    Money::from_dollars_cents(819, 25),
                    Money::from_dollars_cents(998, 62),
                    Money::from_dollars_cents(10, 50),
                ],
            ),
            (
                "Pam Poovey",
                &[
                    Money::from_dollars_cents(74926, 10),
                    Money::from_dollars_cents(2675, 87),
                    Money::from_dollars_cents(3289, 33),
                ],
            ),
            ("Ray Gillette", &[Money::from_dollars_cents(3820, 90)]),
        ];

        let mut registry = Self::new();
        for (name, donations) in seeds {
            let id = registry.next_id();
            registry
                .donors
                .push(Donor::with_donations(id, name, donations.to_vec()));
        }
        registry
    }

    /// Number of donors
    pub fn len(&self) -> usize {
        self.donors.len()
    }

    /// Check if the registry has no donors
    pub fn is_empty(&self) -> bool {
        self.donors.is_empty()
    }

    /// Iterate donors in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &Donor> {
        self.donors.iter()
    }

    /// Names of all donors in insertion order
    pub fn names(&self) -> Vec<&str> {
        self.donors.iter().map(|d| d.name.as_str()).collect()
    }

    /// Get a donor by ID
    pub fn get(&self, id: DonorId) -> Option<&Donor> {
        self.donors.iter().find(|d| d.id == id)
    }

    /// Find a donor by exact full name
    pub fn find_by_name(&self, name: &str) -> Option<&Donor> {
        self.donors.iter().find(|d| d.matches_name(name))
    }

    /// Insert a new donor with an empty history, returning its ID
    ///
    /// Fails if the name is blank or already taken.
    pub fn insert(&mut self, name: &str) -> MailroomResult<DonorId> {
        Donor::validate_name(name).map_err(|e| MailroomError::Validation(e.to_string()))?;

        if self.find_by_name(name).is_some() {
            return Err(MailroomError::Validation(format!(
                "Donor already exists: {}",
                name
            )));
        }

        let id = self.next_id();
        self.donors.push(Donor::new(id, name));
        Ok(id)
    }

    /// Append a donation to a donor's history
    pub fn add_donation(&mut self, id: DonorId, amount: Money) -> MailroomResult<&Donor> {
        let donor = self
            .donors
            .iter_mut()
            .find(|d| d.id == id)
            .ok_or_else(|| MailroomError::donor_not_found(id.to_string()))?;
        donor.add_donation(amount);
        Ok(donor)
    }

    /// IDs are derived from the registry size; donors are never removed, so
    /// they never repeat.
    fn next_id(&self) -> DonorId {
        DonorId::new(self.donors.len() as u32 + 1)
    }
}
