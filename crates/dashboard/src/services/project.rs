//! 项目服务
//!
//! 提供项目相关的业务逻辑操作

use crate::confirm::{Confirm, DELETE_CONFIRMATION_PROMPT};
use crate::error::{ServiceError, ServiceResult};
use crate::services::traits::ProjectServiceTrait;
use crate::validation::validate_form_data;
use chrono::NaiveDate;
use std::sync::Arc;
use store::{Clock, Project, ProjectFormData, ProjectRepositoryTrait};
use tracing::{debug, error};

pub struct ProjectService<PR: ProjectRepositoryTrait> {
    project_repository: Arc<PR>,
    clock: Arc<dyn Clock>,
}

impl<PR: ProjectRepositoryTrait> ProjectService<PR> {
    pub fn new(project_repository: PR, clock: Arc<dyn Clock>) -> Self {
        Self {
            project_repository: Arc::new(project_repository),
            clock,
        }
    }

    fn check(&self, project: &ProjectFormData) -> ServiceResult<()> {
        let errors = validate_form_data(project, self.clock.today());
        if errors.is_empty() {
            Ok(())
        } else {
            debug!("⚠️ 表单校验失败: {}", errors);
            Err(ServiceError::Validation(errors))
        }
    }
}

impl<PR: ProjectRepositoryTrait> Clone for ProjectService<PR> {
    fn clone(&self) -> Self {
        Self {
            project_repository: Arc::clone(&self.project_repository),
            clock: Arc::clone(&self.clock),
        }
    }
}

#[async_trait::async_trait]
impl<PR: ProjectRepositoryTrait> ProjectServiceTrait for ProjectService<PR> {
    async fn list_projects(&self) -> ServiceResult<Arc<Vec<Project>>> {
        Ok(self.project_repository.list_projects().await?)
    }

    async fn get_project_by_id(&self, id: &str) -> ServiceResult<Project> {
        Ok(self.project_repository.get_project_by_id(id).await?)
    }

    async fn create_project(&self, project: ProjectFormData) -> ServiceResult<Project> {
        self.check(&project)?;

        self.project_repository.create_project(project).await.map_err(|err| {
            error!("❌ Error creating project: {}", err);
            err.into()
        })
    }

    async fn update_project(&self, id: &str, update: ProjectFormData) -> ServiceResult<Project> {
        self.check(&update)?;

        self.project_repository.update_project(id, update).await.map_err(|err| {
            error!("❌ Error updating project {}: {}", id, err);
            err.into()
        })
    }

    async fn delete_project(&self, id: &str, confirm: &dyn Confirm) -> ServiceResult<Option<Project>> {
        if !confirm.confirm(DELETE_CONFIRMATION_PROMPT) {
            return Ok(None);
        }

        match self.project_repository.delete_project(id).await {
            Ok(project) => Ok(Some(project)),
            Err(err) => {
                error!("❌ Error deleting project {}: {}", id, err);
                Err(err.into())
            }
        }
    }

    fn today(&self) -> NaiveDate {
        self.clock.today()
    }
}
