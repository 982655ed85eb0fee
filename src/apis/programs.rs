use crate::{
    client::SelfHostClient,
    error::SelfHostResult,
    models::{NewProgram, Program, ProgramUpdate},
};
use reqwest::Method;
use uuid::Uuid;

/// Program API operations
pub struct ProgramsApi<'a> {
    client: &'a SelfHostClient,
}

impl<'a> ProgramsApi<'a> {
    pub(crate) fn new(client: &'a SelfHostClient) -> Self {
        Self { client }
    }

    /// List programs, optionally filtered by tags.
    pub async fn list_programs(
        &self,
        limit: Option<u64>,
        offset: Option<u64>,
        tags: Option<&[String]>,
    ) -> SelfHostResult<Vec<Program>> {
        let mut req = self.client.request(Method::GET, "programs")?;
        req = SelfHostClient::with_pagination(req, limit, offset);
        req = SelfHostClient::with_repeated(req, "tags", tags);

        self.client.execute_list(req).await
    }

    /// Create a new program
    pub async fn create_program(&self, program: &NewProgram) -> SelfHostResult<Program> {
        let req = self.client.request(Method::POST, "programs")?.json(program);

        self.client.execute(req).await
    }

    /// Get a program by UUID
    pub async fn get_program(&self, program_uuid: &Uuid) -> SelfHostResult<Program> {
        let path = format!("programs/{}", program_uuid);
        let req = self.client.request(Method::GET, &path)?;

        self.client.execute(req).await
    }

    /// Update a program; unset fields are left untouched.
    pub async fn update_program(
        &self,
        program_uuid: &Uuid,
        update: &ProgramUpdate,
    ) -> SelfHostResult<()> {
        let path = format!("programs/{}", program_uuid);
        let req = self.client.request(Method::PUT, &path)?.json(update);

        self.client.execute_unit(req).await
    }

    /// Delete a program
    pub async fn delete_program(&self, program_uuid: &Uuid) -> SelfHostResult<()> {
        let path = format!("programs/{}", program_uuid);
        let req = self.client.request(Method::DELETE, &path)?;

        self.client.execute_unit(req).await
    }
}
