//! Task management commands.
//!
//! Tasks are addressed by the index shown in the `#` column of `projman show`
//! or `projman task list`. Indices refer to the full task list, so they stay
//! valid whether or not done tasks are currently hidden.

use crate::{
    libs::{
        formatter::{format_due_date, parse_due_date, parse_prompted_due_date},
        messages::Message,
        session::Session,
        task::{Task, TaskField},
        view::View,
    },
    msg_error, msg_info, msg_print, msg_success,
};
use anyhow::Result;
use chrono::{DateTime, Utc};
use clap::{Args, Subcommand};
use dialoguer::{theme::ColorfulTheme, Confirm, Input};

#[derive(Debug, Args)]
pub struct TaskArgs {
    #[command(subcommand)]
    command: TaskCommand,
}

#[derive(Debug, Subcommand)]
enum TaskCommand {
    /// Append a new task
    Add {
        /// Task name
        name: Option<String>,
        /// Task notes
        #[arg(short, long)]
        notes: Option<String>,
        /// Due date (RFC 3339, 'YYYY-MM-DD HH:MM' or 'YYYY-MM-DD')
        #[arg(long)]
        due: Option<String>,
    },
    /// List visible tasks
    List,
    /// Toggle a task between todo and done
    #[command(visible_alias = "done")]
    Toggle {
        /// Task index
        index: usize,
    },
    /// Delete tasks
    Delete {
        /// Task indices
        #[arg(num_args = 1..)]
        indices: Vec<usize>,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
    /// Edit a task; prompts for every field when no option is given
    Edit {
        /// Task index
        index: usize,
        #[arg(short, long)]
        name: Option<String>,
        #[arg(long)]
        notes: Option<String>,
        /// Set the due date and turn it on
        #[arg(long, conflicts_with = "no_due")]
        due: Option<String>,
        /// Turn the due date off
        #[arg(long)]
        no_due: bool,
    },
}

pub fn cmd(session: &mut Session, args: TaskArgs) -> Result<()> {
    match args.command {
        TaskCommand::Add { name, notes, due } => handle_add(session, name, notes, due),
        TaskCommand::List => handle_list(session),
        TaskCommand::Toggle { index } => handle_toggle(session, index),
        TaskCommand::Delete { indices, yes } => handle_delete(session, indices, yes),
        TaskCommand::Edit {
            index,
            name,
            notes,
            due,
            no_due,
        } => handle_edit(session, index, name, notes, due, no_due),
    }
}

fn handle_add(session: &mut Session, name: Option<String>, notes: Option<String>, due: Option<String>) -> Result<()> {
    let due = match due.as_deref().map(|input| parse_due_date(input).ok_or(input)) {
        Some(Err(input)) => {
            msg_error!(Message::InvalidDueDate(input.to_string()));
            return Ok(());
        }
        Some(Ok(date)) => Some(date),
        None => None,
    };

    let name = match name {
        Some(name) => name,
        None => Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptTaskName.to_string())
            .allow_empty(true)
            .interact_text()?,
    };

    let document = &mut session.document;
    let index = document.add_task();
    document.set_task_field(index, TaskField::Name(name))?;
    if let Some(notes) = notes {
        document.set_task_field(index, TaskField::Notes(notes))?;
    }
    if let Some(date) = due {
        document.set_task_field(index, TaskField::HasDueDate(true))?;
        document.set_task_field(index, TaskField::DueDate(Some(date)))?;
    }

    session.commit()?;
    msg_success!(Message::TaskCreated(index));
    Ok(())
}

fn handle_list(session: &Session) -> Result<()> {
    let project = session.document.project();
    let visible = project.visible_tasks();
    if visible.is_empty() {
        msg_info!(Message::NoTasksToShow);
    } else {
        View::tasks(&visible);
    }

    let hidden = project.tasks.len() - visible.len();
    if hidden > 0 {
        msg_info!(Message::TasksHiddenDone(hidden));
    }
    Ok(())
}

fn handle_toggle(session: &mut Session, index: usize) -> Result<()> {
    let Some(status) = Session::recover("task", session.document.toggle_task_status(index))? else {
        return Ok(());
    };

    session.commit()?;
    if status.is_done() {
        msg_success!(Message::TaskMarkedDone(index));
    } else {
        msg_success!(Message::TaskMarkedTodo(index));
    }
    Ok(())
}

fn handle_delete(session: &mut Session, indices: Vec<usize>, yes: bool) -> Result<()> {
    if indices.is_empty() {
        msg_error!(Message::NoIndicesProvided);
        return Ok(());
    }

    if !yes {
        let tasks = &session.document.project().tasks;
        let preview: Vec<(usize, &Task)> = indices.iter().filter_map(|&index| tasks.get(index).map(|task| (index, task))).collect();
        msg_print!(Message::TasksToBeDeleted, true);
        View::tasks(&preview);

        let confirmed = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::ConfirmDeleteItems(indices.len(), "task".to_string()).to_string())
            .default(false)
            .interact()?;
        if !confirmed {
            msg_info!(Message::OperationCancelled);
            return Ok(());
        }
    }

    let Some(removed) = Session::recover("task", session.document.delete_tasks(indices))? else {
        return Ok(());
    };

    session.commit()?;
    msg_success!(Message::TasksDeletedCount(removed.len()));
    Ok(())
}

fn handle_edit(session: &mut Session, index: usize, name: Option<String>, notes: Option<String>, due: Option<String>, no_due: bool) -> Result<()> {
    let Some(task) = Session::recover("task", session.document.task(index).cloned())? else {
        return Ok(());
    };

    let changes = if name.is_none() && notes.is_none() && due.is_none() && !no_due {
        match prompt_changes(index, &task)? {
            Some(changes) => changes,
            None => return Ok(()),
        }
    } else {
        let mut changes = Vec::new();
        if let Some(name) = name {
            changes.push(TaskField::Name(name));
        }
        if let Some(notes) = notes {
            changes.push(TaskField::Notes(notes));
        }
        if let Some(input) = due {
            let Some(date) = parse_due_date(&input) else {
                msg_error!(Message::InvalidDueDate(input));
                return Ok(());
            };
            changes.push(TaskField::HasDueDate(true));
            changes.push(TaskField::DueDate(Some(date)));
        }
        if no_due {
            changes.push(TaskField::HasDueDate(false));
        }
        changes
    };

    let mut edited = task.clone();
    for change in &changes {
        edited.apply(change.clone());
    }
    if edited == task {
        msg_info!(Message::NoChangesDetected);
        return Ok(());
    }

    for change in changes {
        if Session::recover("task", session.document.set_task_field(index, change))?.is_none() {
            return Ok(());
        }
    }

    session.commit()?;
    msg_success!(Message::TaskUpdated(index));
    Ok(())
}

/// Asks for every field, pre-filled with the current values.
///
/// Returns `None` when the user declines to save.
fn prompt_changes(index: usize, task: &Task) -> Result<Option<Vec<TaskField>>> {
    msg_print!(Message::EditingTask(task.name.clone()), true);

    let name: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptTaskName.to_string())
        .default(task.name.clone())
        .allow_empty(true)
        .interact_text()?;

    let notes: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptTaskNotes.to_string())
        .default(task.notes.clone())
        .allow_empty(true)
        .interact_text()?;

    let has_due_date = Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptTaskHasDueDate.to_string())
        .default(task.has_due_date)
        .interact()?;

    let mut changes = vec![TaskField::Name(name), TaskField::Notes(notes), TaskField::HasDueDate(has_due_date)];

    if has_due_date {
        let current: DateTime<Utc> = task.due_date.unwrap_or_else(Utc::now);
        let invalid_msg = Message::InvalidDueDate(String::new()).to_string();
        let input: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptTaskDueDate.to_string())
            .default(format_due_date(&current))
            .validate_with(|input: &String| -> Result<(), &str> {
                if parse_due_date(input).is_some() {
                    Ok(())
                } else {
                    Err(&invalid_msg)
                }
            })
            .interact_text()?;
        changes.push(TaskField::DueDate(parse_prompted_due_date(&input, task.due_date)));
    }

    let mut preview = task.clone();
    for change in &changes {
        preview.apply(change.clone());
    }
    msg_print!(Message::TaskEditPreview, true);
    View::tasks(&[(index, &preview)]);

    let confirmed = Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::ConfirmTaskUpdate.to_string())
        .default(true)
        .interact()?;
    if !confirmed {
        msg_info!(Message::OperationCancelled);
        return Ok(None);
    }

    Ok(Some(changes))
}
