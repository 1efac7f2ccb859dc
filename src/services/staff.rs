//! Library staff service

use validator::Validate;

use crate::{
    error::AppResult,
    models::staff::{CreateStaff, LibraryStaff, UpdateStaff},
    repository::Repository,
};

#[derive(Clone)]
pub struct StaffService {
    repository: Repository,
}

impl StaffService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> AppResult<Vec<LibraryStaff>> {
        self.repository.staff.list().await
    }

    pub async fn get_by_id(&self, id: i32) -> AppResult<LibraryStaff> {
        self.repository.staff.get(id).await
    }

    pub async fn create(&self, data: &CreateStaff) -> AppResult<LibraryStaff> {
        data.validate()?;
        let staff = self.repository.staff.insert(data).await?;
        tracing::info!("Created staff member {}", staff.staff_id);
        Ok(staff)
    }

    pub async fn update(&self, id: i32, data: &UpdateStaff) -> AppResult<LibraryStaff> {
        data.validate()?;
        self.repository.staff.update(id, data).await
    }

    pub async fn delete(&self, id: i32) -> AppResult<()> {
        self.repository.staff.delete(id).await?;
        tracing::info!("Deleted staff member {}", id);
        Ok(())
    }
}
