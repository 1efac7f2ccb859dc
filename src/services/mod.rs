//! Business logic services

pub mod borrowings;
pub mod catalog;
pub mod health;
pub mod members;
pub mod staff;

use crate::repository::Repository;

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub catalog: catalog::CatalogService,
    pub staff: staff::StaffService,
    pub members: members::MembersService,
    pub borrowings: borrowings::BorrowingsService,
    pub health: health::HealthService,
}

impl Services {
    /// Create all services with the given repository
    pub fn new(repository: Repository) -> Self {
        Self {
            catalog: catalog::CatalogService::new(repository.clone()),
            staff: staff::StaffService::new(repository.clone()),
            members: members::MembersService::new(repository.clone()),
            borrowings: borrowings::BorrowingsService::new(repository.clone()),
            health: health::HealthService::new(repository),
        }
    }
}
