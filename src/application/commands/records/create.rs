// src/application/commands/records/create.rs
use super::RecordCommandService;
use crate::{
    application::{
        dto::RecordDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        errors::DomainError,
        record::{CollectionName, FieldName, NewRecord},
    },
};

pub struct CreateRecordCommand {
    pub collection: String,
    pub fields: Vec<(String, String)>,
}

impl CreateRecordCommand {
    pub fn builder() -> CreateRecordCommandBuilder {
        CreateRecordCommandBuilder::default()
    }
}

#[derive(Default)]
pub struct CreateRecordCommandBuilder {
    collection: Option<String>,
    fields: Vec<(String, String)>,
}

impl CreateRecordCommandBuilder {
    pub fn collection(mut self, collection: impl Into<String>) -> Self {
        self.collection = Some(collection.into());
        self
    }

    pub fn field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.push((name.into(), value.into()));
        self
    }

    pub fn build(self) -> Result<CreateRecordCommand, &'static str> {
        Ok(CreateRecordCommand {
            collection: self.collection.ok_or("collection is required")?,
            fields: self.fields,
        })
    }
}

impl RecordCommandService {
    /// Assembles the record, runs the creating hooks and inserts it.
    ///
    /// A unique violation on a hook-generated field restarts from the
    /// assembled record, so hooks see the store again, until `max_attempts`
    /// inserts have been tried.
    pub async fn create_record(&self, command: CreateRecordCommand) -> ApplicationResult<RecordDto> {
        let collection = CollectionName::new(command.collection)?;
        let now = self.clock.now();

        let mut template = NewRecord::new(collection, now);
        for (name, value) in command.fields {
            template.set_field(&FieldName::new(name)?, value);
        }

        let mut attempt = 1u32;
        loop {
            let mut record = template.clone();
            let generated = self.run_hooks(&mut record).await?;

            match self.store.insert(record).await {
                Ok(created) => {
                    tracing::info!(
                        collection = %created.collection,
                        id = %created.id,
                        attempt,
                        "record created"
                    );
                    return Ok(created.into());
                }
                Err(DomainError::UniqueViolation { field, value })
                    if attempt < self.max_attempts
                        && generated.iter().any(|f| f.as_str() == field) =>
                {
                    tracing::warn!(
                        field = %field,
                        value = %value,
                        attempt,
                        "generated value collided on insert, regenerating"
                    );
                    attempt += 1;
                }
                Err(DomainError::UniqueViolation { field, value }) => {
                    return Err(ApplicationError::conflict(format!(
                        "{field} {value:?} already exists"
                    )));
                }
                Err(err) => return Err(err.into()),
            }
        }
    }

    async fn run_hooks(&self, record: &mut NewRecord) -> ApplicationResult<Vec<FieldName>> {
        let collection = record.collection.clone();
        let mut generated = Vec::new();
        for hook in self.hooks.iter().filter(|hook| hook.applies_to(&collection)) {
            if let super::HookOutcome::Generated(field) =
                hook.creating(record, self.store.as_ref()).await?
            {
                generated.push(field);
            }
        }
        Ok(generated)
    }
}
