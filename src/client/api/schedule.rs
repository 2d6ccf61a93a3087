use crate::model::schedule::{SaveScheduleDto, SaveTaskDto, ScheduleDto, TaskDto};

use super::request::ApiRequest;

/// GET /api/client/servers/{server}/schedules
pub fn get_schedules(server: &str) -> ApiRequest<Vec<ScheduleDto>> {
    ApiRequest::get("/api/client/servers/{server}/schedules")
        .param("server", server)
        .query("include", "tasks")
        .list()
}

/// GET /api/client/servers/{server}/schedules/{schedule}
pub fn get_schedule(server: &str, schedule: u64) -> ApiRequest<ScheduleDto> {
    ApiRequest::get("/api/client/servers/{server}/schedules/{schedule}")
        .param("server", server)
        .param("schedule", schedule)
        .query("include", "tasks")
        .item()
}

/// POST /api/client/servers/{server}/schedules[/{schedule}]
/// Creates a schedule when `schedule` is `None`, updates it otherwise
pub fn create_or_update_schedule(
    server: &str,
    schedule: Option<u64>,
    dto: &SaveScheduleDto,
) -> ApiRequest<ScheduleDto> {
    let request = match schedule {
        Some(id) => ApiRequest::post("/api/client/servers/{server}/schedules/{schedule}")
            .param("schedule", id),
        None => ApiRequest::post("/api/client/servers/{server}/schedules"),
    };

    request.param("server", server).json_body(dto).item()
}

/// DELETE /api/client/servers/{server}/schedules/{schedule}
pub fn delete_schedule(server: &str, schedule: u64) -> ApiRequest<()> {
    ApiRequest::delete("/api/client/servers/{server}/schedules/{schedule}")
        .param("server", server)
        .param("schedule", schedule)
}

/// POST /api/client/servers/{server}/schedules/{schedule}/execute
pub fn trigger_schedule(server: &str, schedule: u64) -> ApiRequest<()> {
    ApiRequest::post("/api/client/servers/{server}/schedules/{schedule}/execute")
        .param("server", server)
        .param("schedule", schedule)
}

/// POST /api/client/servers/{server}/schedules/{schedule}/tasks[/{task}]
pub fn create_or_update_task(
    server: &str,
    schedule: u64,
    task: Option<u64>,
    dto: &SaveTaskDto,
) -> ApiRequest<TaskDto> {
    let request = match task {
        Some(id) => {
            ApiRequest::post("/api/client/servers/{server}/schedules/{schedule}/tasks/{task}")
                .param("task", id)
        }
        None => ApiRequest::post("/api/client/servers/{server}/schedules/{schedule}/tasks"),
    };

    request
        .param("server", server)
        .param("schedule", schedule)
        .json_body(dto)
        .item()
}

/// DELETE /api/client/servers/{server}/schedules/{schedule}/tasks/{task}
pub fn delete_task(server: &str, schedule: u64, task: u64) -> ApiRequest<()> {
    ApiRequest::delete("/api/client/servers/{server}/schedules/{schedule}/tasks/{task}")
        .param("server", server)
        .param("schedule", schedule)
        .param("task", task)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{client::api::request::Body, model::schedule::TaskAction};
    use serde_json::json;

    /// Tests create versus update paths.
    ///
    /// Expected: schedule id only present for updates
    #[test]
    fn schedule_save_paths() {
        let dto = SaveScheduleDto {
            name: "Restart".to_string(),
            is_active: true,
            only_when_online: false,
            minute: "0".to_string(),
            hour: "*/6".to_string(),
            day_of_month: "*".to_string(),
            month: "*".to_string(),
            day_of_week: "*".to_string(),
        };

        assert_eq!(create_or_update_schedule("abc123", None, &dto).path(), "/api/client/servers/abc123/schedules");
        let update = create_or_update_schedule("abc123", Some(7), &dto);
        assert_eq!(update.path(), "/api/client/servers/abc123/schedules/7");
        assert_eq!(
            update.body(),
            Ok(&Body::Json(json!({
                "name": "Restart",
                "is_active": true,
                "only_when_online": false,
                "minute": "0",
                "hour": "*/6",
                "day_of_month": "*",
                "month": "*",
                "day_of_week": "*"
            })))
        );
    }

    /// Tests schedule decoding with nested tasks.
    ///
    /// Verifies tasks come out of the relationship sorted by sequence.
    ///
    /// Expected: Ok with two ordered tasks and a readable cron string
    #[test]
    fn decodes_schedule_with_tasks() {
        let task = |id: u64, sequence: u64, action: &str| {
            json!({
                "object": "schedule_task",
                "attributes": {
                    "id": id, "sequence_id": sequence, "action": action, "payload": "say hi",
                    "time_offset": 0, "is_queued": false, "continue_on_failure": false,
                    "created_at": "2024-01-01T00:00:00+00:00", "updated_at": "2024-01-01T00:00:00+00:00"
                }
            })
        };
        let body = json!({
            "object": "server_schedule",
            "attributes": {
                "id": 7,
                "name": "Restart",
                "cron": { "day_of_week": "*", "day_of_month": "*", "month": "*", "hour": "*/6", "minute": "0" },
                "is_active": true,
                "is_processing": false,
                "only_when_online": true,
                "last_run_at": null,
                "next_run_at": "2024-01-01T06:00:00+00:00",
                "created_at": "2024-01-01T00:00:00+00:00",
                "updated_at": "2024-01-01T00:00:00+00:00",
                "relationships": { "tasks": { "object": "list", "data": [task(2, 2, "power"), task(1, 1, "command")] } }
            }
        })
        .to_string();

        let schedule = get_schedule("abc123", 7).decode(200, &body).unwrap();
        let tasks = schedule.tasks();

        assert_eq!(schedule.cron.to_string(), "0 */6 * * *");
        assert_eq!(tasks.iter().map(|t| t.id).collect::<Vec<_>>(), vec![1, 2]);
        assert_eq!(tasks[0].action, TaskAction::Command);
        assert!(schedule.last_run_at.is_none());
    }
}
