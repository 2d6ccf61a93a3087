use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::api::FractalList;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CronDto {
    pub minute: String,
    pub hour: String,
    pub day_of_month: String,
    pub month: String,
    pub day_of_week: String,
}

impl std::fmt::Display for CronDto {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {} {} {} {}",
            self.minute, self.hour, self.day_of_month, self.month, self.day_of_week
        )
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleDto {
    pub id: u64,
    pub name: String,
    pub cron: CronDto,
    pub is_active: bool,
    #[serde(default)]
    pub is_processing: bool,
    #[serde(default)]
    pub only_when_online: bool,
    #[serde(default)]
    pub last_run_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub next_run_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub relationships: Option<ScheduleRelationshipsDto>,
}

impl ScheduleDto {
    /// Tasks ordered by their sequence, empty when the relationship was not included.
    pub fn tasks(&self) -> Vec<TaskDto> {
        let mut tasks = self
            .relationships
            .as_ref()
            .map(|r| r.tasks.items().cloned().collect::<Vec<_>>())
            .unwrap_or_default();
        tasks.sort_by_key(|task| task.sequence_id);
        tasks
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ScheduleRelationshipsDto {
    pub tasks: FractalList<TaskDto>,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TaskAction {
    Command,
    Power,
    Backup,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TaskDto {
    pub id: u64,
    pub sequence_id: u64,
    pub action: TaskAction,
    pub payload: String,
    pub time_offset: u64,
    #[serde(default)]
    pub is_queued: bool,
    #[serde(default)]
    pub continue_on_failure: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SaveScheduleDto {
    pub name: String,
    pub is_active: bool,
    pub only_when_online: bool,
    pub minute: String,
    pub hour: String,
    pub day_of_month: String,
    pub month: String,
    pub day_of_week: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SaveTaskDto {
    pub action: TaskAction,
    pub payload: String,
    pub time_offset: u64,
    pub continue_on_failure: bool,
}
