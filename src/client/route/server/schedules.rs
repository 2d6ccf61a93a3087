use dioxus::prelude::*;

#[cfg(feature = "web")]
use dioxus_logger::tracing;

use crate::{
    client::{
        component::{ConfirmationModal, FlashMessages, LoadingIndicator, Modal},
        model::cache::Cache,
        store::{
            flash::{FlashKind, FlashState},
            server::ServerState,
        },
        validation::{validate_cron_field, validate_schedule_name},
    },
    model::schedule::{SaveScheduleDto, SaveTaskDto, ScheduleDto, TaskAction},
};

#[cfg(feature = "web")]
use crate::client::api::schedule::{
    create_or_update_schedule, create_or_update_task, delete_schedule, delete_task, get_schedules,
    trigger_schedule,
};

const FLASH_KEY: &str = "schedules";

/// Editable copy of a schedule, before validation.
#[derive(Clone, Debug, PartialEq)]
struct ScheduleForm {
    name: String,
    minute: String,
    hour: String,
    day_of_month: String,
    month: String,
    day_of_week: String,
    is_active: bool,
    only_when_online: bool,
}

impl Default for ScheduleForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            minute: "*/5".to_string(),
            hour: "*".to_string(),
            day_of_month: "*".to_string(),
            month: "*".to_string(),
            day_of_week: "*".to_string(),
            is_active: true,
            only_when_online: false,
        }
    }
}

impl From<&ScheduleDto> for ScheduleForm {
    fn from(schedule: &ScheduleDto) -> Self {
        Self {
            name: schedule.name.clone(),
            minute: schedule.cron.minute.clone(),
            hour: schedule.cron.hour.clone(),
            day_of_month: schedule.cron.day_of_month.clone(),
            month: schedule.cron.month.clone(),
            day_of_week: schedule.cron.day_of_week.clone(),
            is_active: schedule.is_active,
            only_when_online: schedule.only_when_online,
        }
    }
}

impl ScheduleForm {
    /// Validated payload, or the first problem found.
    fn to_dto(&self) -> Result<SaveScheduleDto, String> {
        let problem = validate_schedule_name(&self.name)
            .or_else(|| validate_cron_field("Minute", &self.minute))
            .or_else(|| validate_cron_field("Hour", &self.hour))
            .or_else(|| validate_cron_field("Day of month", &self.day_of_month))
            .or_else(|| validate_cron_field("Month", &self.month))
            .or_else(|| validate_cron_field("Day of week", &self.day_of_week));

        if let Some(problem) = problem {
            return Err(problem);
        }

        Ok(SaveScheduleDto {
            name: self.name.trim().to_string(),
            is_active: self.is_active,
            only_when_online: self.only_when_online,
            minute: self.minute.trim().to_string(),
            hour: self.hour.trim().to_string(),
            day_of_month: self.day_of_month.trim().to_string(),
            month: self.month.trim().to_string(),
            day_of_week: self.day_of_week.trim().to_string(),
        })
    }
}

#[component]
pub fn ServerSchedules(id: String) -> Element {
    let state = use_context::<Signal<ServerState>>();
    let mut flash = use_context::<Signal<FlashState>>();

    let mut schedules = use_signal(Cache::<Vec<ScheduleDto>>::default);
    let mut loading = use_signal(|| false);
    let mut refetch_trigger = use_signal(|| 0u32);
    let mut show_edit_modal = use_signal(|| false);
    let mut editing = use_signal(|| None::<ScheduleDto>);
    let mut show_delete_modal = use_signal(|| false);
    let mut schedule_to_delete = use_signal(|| None::<ScheduleDto>);
    let mut is_deleting = use_signal(|| false);

    #[cfg(feature = "web")]
    let future = {
        let server_id = id.clone();
        use_resource(use_reactive!(|(server_id,)| async move {
            let _ = refetch_trigger();
            loading.set(true);
            get_schedules(&server_id).send().await
        }))
    };

    #[cfg(feature = "web")]
    use_effect(move || {
        if let Some(result) = future.read_unchecked().as_ref() {
            if let Err(err) = result {
                tracing::error!("Failed to fetch schedules: {}", err);
            }
            schedules.set(Cache::from(result.clone()));
            loading.set(false);
        }
    });

    let on_delete = {
        let id = id.clone();
        move |_: ()| {
            let Some(schedule) = schedule_to_delete() else {
                return;
            };
            is_deleting.set(true);

            #[cfg(feature = "web")]
            {
                let id = id.clone();
                spawn(async move {
                    match delete_schedule(&id, schedule.id).send().await {
                        Ok(()) => {
                            flash.write().add(
                                FLASH_KEY,
                                FlashKind::Success,
                                format!("Deleted schedule {}.", schedule.name),
                            );
                            refetch_trigger.set(refetch_trigger() + 1);
                        }
                        Err(err) => {
                            tracing::error!("Failed to delete schedule {}: {}", schedule.id, err);
                            flash.write().error(FLASH_KEY, err.message);
                        }
                    }
                    is_deleting.set(false);
                    show_delete_modal.set(false);
                });
            }
        }
    };

    let can_create = state.read().can("schedule.create");

    let listing = match &*schedules.read() {
        Cache::NotFetched | Cache::Loading => rsx!(
            div { class: "flex justify-center py-8", span { class: "loading loading-spinner" } }
        ),
        Cache::Error(err) => rsx!(div { class: "alert alert-error", "{err.message}" }),
        Cache::Fetched(list) if list.is_empty() => rsx!(
            div { class: "text-center py-8 opacity-50", "There are no schedules configured for this server." }
        ),
        Cache::Fetched(list) => rsx!(
            div {
                class: "flex flex-col gap-2",
                for schedule in list.clone() {
                    ScheduleRow {
                        key: "{schedule.id}",
                        id: id.clone(),
                        schedule: schedule.clone(),
                        refetch_trigger,
                        on_edit: move |schedule: ScheduleDto| {
                            editing.set(Some(schedule));
                            show_edit_modal.set(true);
                        },
                        on_delete: move |schedule: ScheduleDto| {
                            schedule_to_delete.set(Some(schedule));
                            show_delete_modal.set(true);
                        },
                    }
                }
            }
        ),
    };

    rsx! {
        div {
            class: "flex items-center justify-between gap-4 mb-4",
            div {
                class: "flex items-center gap-2",
                h2 { class: "text-lg font-semibold", "Schedules" }
                LoadingIndicator { loading }
            }
            if can_create {
                button {
                    class: "btn btn-primary btn-sm",
                    onclick: move |_| {
                        editing.set(None);
                        show_edit_modal.set(true);
                    },
                    "Create Schedule"
                }
            }
        }
        FlashMessages { flash_key: FLASH_KEY.to_string() }
        div {
            class: "card bg-base-200",
            div { class: "card-body", {listing} }
        }

        ScheduleModal {
            show: show_edit_modal,
            id: id.clone(),
            schedule: editing(),
            refetch_trigger,
        }

        ConfirmationModal {
            show: show_delete_modal,
            title: "Delete Schedule".to_string(),
            message: rsx!(
                if let Some(schedule) = schedule_to_delete() {
                    p {
                        class: "py-4",
                        "Are you sure you want to delete "
                        span { class: "font-bold", "\"{schedule.name}\"" }
                        "? All of its tasks will be removed and running processes terminated."
                    }
                }
            ),
            confirm_text: "Delete".to_string(),
            is_processing: is_deleting(),
            on_confirm: on_delete,
        }
    }
}

#[component]
fn ScheduleRow(
    id: String,
    schedule: ScheduleDto,
    mut refetch_trigger: Signal<u32>,
    on_edit: EventHandler<ScheduleDto>,
    on_delete: EventHandler<ScheduleDto>,
) -> Element {
    let state = use_context::<Signal<ServerState>>();
    let mut flash = use_context::<Signal<FlashState>>();
    let mut expanded = use_signal(|| false);

    let on_trigger = {
        let id = id.clone();
        let schedule_id = schedule.id;
        move |_: MouseEvent| {
            #[cfg(feature = "web")]
            {
                let id = id.clone();
                spawn(async move {
                    match trigger_schedule(&id, schedule_id).send().await {
                        Ok(()) => refetch_trigger.set(refetch_trigger() + 1),
                        Err(err) => {
                            tracing::error!("Failed to run schedule {}: {}", schedule_id, err);
                            flash.write().error(FLASH_KEY, err.message);
                        }
                    }
                });
            }
        }
    };

    let on_delete_task = {
        let id = id.clone();
        let schedule_id = schedule.id;
        move |task_id: u64| {
            #[cfg(feature = "web")]
            {
                let id = id.clone();
                spawn(async move {
                    match delete_task(&id, schedule_id, task_id).send().await {
                        Ok(()) => refetch_trigger.set(refetch_trigger() + 1),
                        Err(err) => {
                            tracing::error!("Failed to delete task {}: {}", task_id, err);
                            flash.write().error(FLASH_KEY, err.message);
                        }
                    }
                });
            }
        }
    };

    let can_update = state.read().can("schedule.update");
    let can_delete = state.read().can("schedule.delete");
    let tasks = schedule.tasks();
    let cron = schedule.cron.to_string();
    let next_run = schedule
        .next_run_at
        .map(|at| at.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| "n/a".to_string());
    let edit_target = schedule.clone();
    let delete_target = schedule.clone();

    rsx! {
        div {
            class: "p-3 rounded-box bg-base-100",
            div {
                class: "flex flex-wrap items-center justify-between gap-4",
                button {
                    class: "flex flex-col items-start text-left",
                    onclick: move |_| expanded.set(!expanded()),
                    div {
                        class: "flex items-center gap-2",
                        span { class: "font-semibold", "{schedule.name}" }
                        if schedule.is_processing {
                            span { class: "badge badge-sm badge-info", "Processing" }
                        } else if schedule.is_active {
                            span { class: "badge badge-sm badge-success", "Active" }
                        } else {
                            span { class: "badge badge-sm", "Inactive" }
                        }
                    }
                    span { class: "text-xs opacity-70 font-mono", "{cron}" }
                    span { class: "text-xs opacity-70", "Next run: {next_run}" }
                }
                div {
                    class: "flex gap-2",
                    if can_update {
                        button {
                            class: "btn btn-xs",
                            disabled: schedule.is_processing || tasks.is_empty(),
                            onclick: on_trigger,
                            "Run Now"
                        }
                        button {
                            class: "btn btn-xs",
                            onclick: move |_| on_edit.call(edit_target.clone()),
                            "Edit"
                        }
                    }
                    if can_delete {
                        button {
                            class: "btn btn-xs btn-error",
                            onclick: move |_| on_delete.call(delete_target.clone()),
                            "Delete"
                        }
                    }
                }
            }
            if expanded() {
                div {
                    class: "mt-3 flex flex-col gap-2",
                    if tasks.is_empty() {
                        p { class: "text-sm opacity-70", "No tasks have been configured for this schedule." }
                    }
                    for task in tasks.clone() {
                        {
                            let task_id = task.id;
                            let on_delete_task = on_delete_task.clone();
                            let action = format!("{:?}", task.action).to_lowercase();
                            rsx! {
                                div {
                                    key: "{task.id}",
                                    class: "flex items-center justify-between gap-2 text-sm",
                                    span {
                                        span { class: "badge badge-sm mr-2", "{task.sequence_id}" }
                                        span { class: "font-semibold mr-2", "{action}" }
                                        code { "{task.payload}" }
                                        if task.time_offset > 0 {
                                            span { class: "opacity-70 ml-2", "after {task.time_offset}s" }
                                        }
                                    }
                                    if can_update {
                                        button {
                                            class: "btn btn-xs btn-ghost",
                                            onclick: move |_| on_delete_task(task_id),
                                            "Remove"
                                        }
                                    }
                                }
                            }
                        }
                    }
                    if can_update {
                        NewTaskForm { id: id.clone(), schedule_id: schedule.id, refetch_trigger }
                    }
                }
            }
        }
    }
}

#[component]
fn NewTaskForm(id: String, schedule_id: u64, mut refetch_trigger: Signal<u32>) -> Element {
    let mut flash = use_context::<Signal<FlashState>>();
    let mut action = use_signal(|| TaskAction::Command);
    let mut payload = use_signal(String::new);
    let mut offset = use_signal(|| 0u64);

    let on_submit = move |evt: Event<FormData>| {
        evt.prevent_default();
        if payload().trim().is_empty() && action() != TaskAction::Backup {
            flash.write().error(FLASH_KEY, "A task payload is required.");
            return;
        }

        let dto = SaveTaskDto {
            action: action(),
            payload: payload().trim().to_string(),
            time_offset: offset(),
            continue_on_failure: false,
        };

        #[cfg(feature = "web")]
        {
            let id = id.clone();
            spawn(async move {
                match create_or_update_task(&id, schedule_id, None, &dto).send().await {
                    Ok(_) => {
                        payload.set(String::new());
                        refetch_trigger.set(refetch_trigger() + 1);
                    }
                    Err(err) => {
                        tracing::error!("Failed to create task: {}", err);
                        flash.write().error(FLASH_KEY, err.message);
                    }
                }
            });
        }
    };

    rsx! {
        form {
            class: "flex flex-wrap items-center gap-2",
            onsubmit: on_submit,
            select {
                class: "select select-bordered select-xs",
                onchange: move |evt| {
                    action.set(match evt.value().as_str() {
                        "power" => TaskAction::Power,
                        "backup" => TaskAction::Backup,
                        _ => TaskAction::Command,
                    });
                },
                option { value: "command", "Send command" }
                option { value: "power", "Power action" }
                option { value: "backup", "Create backup" }
            }
            input {
                class: "input input-bordered input-xs flex-1",
                r#type: "text",
                placeholder: "Payload",
                value: "{payload}",
                oninput: move |evt| payload.set(evt.value()),
            }
            input {
                class: "input input-bordered input-xs w-20",
                r#type: "number",
                min: "0",
                max: "900",
                value: "{offset}",
                oninput: move |evt| offset.set(evt.value().parse().unwrap_or_default()),
            }
            button { class: "btn btn-xs", r#type: "submit", "Add Task" }
        }
    }
}

#[component]
fn ScheduleModal(
    mut show: Signal<bool>,
    id: String,
    schedule: Option<ScheduleDto>,
    mut refetch_trigger: Signal<u32>,
) -> Element {
    let mut form = use_signal(ScheduleForm::default);
    let mut error_message = use_signal(|| None::<String>);
    let mut is_submitting = use_signal(|| false);
    let schedule_id = schedule.as_ref().map(|s| s.id);

    use_effect(use_reactive!(|(schedule,)| {
        if show() {
            form.set(schedule.as_ref().map(ScheduleForm::from).unwrap_or_default());
            error_message.set(None);
        }
    }));

    let on_submit = move |evt: Event<FormData>| {
        evt.prevent_default();
        let dto = match form.read().to_dto() {
            Ok(dto) => dto,
            Err(problem) => {
                error_message.set(Some(problem));
                return;
            }
        };

        is_submitting.set(true);

        #[cfg(feature = "web")]
        {
            let id = id.clone();
            spawn(async move {
                match create_or_update_schedule(&id, schedule_id, &dto).send().await {
                    Ok(_) => {
                        refetch_trigger.set(refetch_trigger() + 1);
                        show.set(false);
                    }
                    Err(err) => {
                        tracing::error!("Failed to save schedule: {}", err);
                        error_message.set(Some(err.message));
                    }
                }
                is_submitting.set(false);
            });
        }
    };

    let title = if schedule_id.is_some() {
        "Edit Schedule"
    } else {
        "Create Schedule"
    };

    let cron_input = move |label: &'static str, value: String, update: fn(&mut ScheduleForm, String)| {
        rsx! {
            label {
                class: "form-control",
                span { class: "label-text mb-1 text-xs", "{label}" }
                input {
                    class: "input input-bordered input-sm w-full font-mono",
                    r#type: "text",
                    value: "{value}",
                    oninput: move |evt| update(&mut form.write(), evt.value()),
                }
            }
        }
    };

    let current = form();

    rsx! {
        Modal {
            show,
            title: title.to_string(),
            prevent_close: is_submitting(),
            width: "max-w-2xl",
            form {
                class: "flex flex-col gap-4",
                onsubmit: on_submit,
                label {
                    class: "form-control",
                    span { class: "label-text mb-1", "Schedule name" }
                    input {
                        class: "input input-bordered w-full",
                        r#type: "text",
                        value: "{current.name}",
                        oninput: move |evt| form.write().name = evt.value(),
                    }
                }
                div {
                    class: "grid grid-cols-5 gap-2",
                    {cron_input("Minute", current.minute.clone(), |f, v| f.minute = v)}
                    {cron_input("Hour", current.hour.clone(), |f, v| f.hour = v)}
                    {cron_input("Day of month", current.day_of_month.clone(), |f, v| f.day_of_month = v)}
                    {cron_input("Month", current.month.clone(), |f, v| f.month = v)}
                    {cron_input("Day of week", current.day_of_week.clone(), |f, v| f.day_of_week = v)}
                }
                label {
                    class: "label cursor-pointer justify-start gap-2",
                    input {
                        class: "checkbox",
                        r#type: "checkbox",
                        checked: current.is_active,
                        onchange: move |evt| form.write().is_active = evt.checked(),
                    }
                    span { class: "label-text", "Schedule enabled" }
                }
                label {
                    class: "label cursor-pointer justify-start gap-2",
                    input {
                        class: "checkbox",
                        r#type: "checkbox",
                        checked: current.only_when_online,
                        onchange: move |evt| form.write().only_when_online = evt.checked(),
                    }
                    span { class: "label-text", "Only when server is online" }
                }
                if let Some(message) = error_message() {
                    p { class: "text-error text-sm", "{message}" }
                }
                div {
                    class: "modal-action",
                    button {
                        class: "btn btn-primary",
                        r#type: "submit",
                        disabled: is_submitting(),
                        if schedule_id.is_some() { "Save Changes" } else { "Create Schedule" }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Tests that the default form produces a valid payload once named.
    ///
    /// Expected: trimmed name, default every-five-minutes cron
    #[test]
    fn default_form_is_valid_once_named() {
        let form = ScheduleForm {
            name: "  Restart  ".to_string(),
            ..ScheduleForm::default()
        };
        let dto = form.to_dto().unwrap();
        assert_eq!(dto.name, "Restart");
        assert_eq!(dto.minute, "*/5");
        assert!(dto.is_active);
    }

    /// Tests that cron problems are reported per field.
    ///
    /// Expected: the first invalid field is named in the message
    #[test]
    fn reports_invalid_cron_fields() {
        let form = ScheduleForm {
            name: "Backup".to_string(),
            hour: "noon".to_string(),
            ..ScheduleForm::default()
        };
        assert_eq!(
            form.to_dto().unwrap_err(),
            "Hour may only contain numbers and * / , -"
        );

        let unnamed = ScheduleForm::default();
        assert_eq!(unnamed.to_dto().unwrap_err(), "Schedule name is required.");
    }
}
