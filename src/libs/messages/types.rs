#[derive(Debug, Clone)]
pub enum Message {
    // === TASK MESSAGES ===
    TaskCreated(usize),               // index
    TaskUpdated(usize),               // index
    TaskMarkedDone(usize),            // index
    TaskMarkedTodo(usize),            // index
    TasksDeletedCount(usize),         // count
    TasksHeader,
    TasksHiddenDone(usize),           // hidden count
    NoTasksToShow,
    NoIndicesProvided,
    TasksToBeDeleted,
    ConfirmDeleteItems(usize, String), // count, kind
    NoChangesDetected,
    EditingTask(String),              // task name
    TaskEditPreview,
    ConfirmTaskUpdate,
    InvalidDueDate(String),           // input

    // === SETTINGS MESSAGES ===
    DoneTasksShown,
    DoneTasksHidden,

    // === PROJECT / DOCUMENT MESSAGES ===
    ProjectHeader(String),            // project name
    ProjectSummary {
        total: usize,
        done: usize,
        bookmarks: usize,
        quick_notes: usize,
    },
    ProjectInfoUpdated,
    DocumentCreated(String),          // path
    DocumentAlreadyExists(String),    // path
    DocumentOpenFailed(String),       // path
    DocumentSaveFailed(String),       // path
    NoDocumentPath,
    DocumentConsistent,
    DocumentInconsistent(String),     // details

    // === INDEX MESSAGES ===
    IndexOutOfRange {
        kind: String,
        index: usize,
        len: usize,
    },

    // === BOOKMARK MESSAGES ===
    BookmarkAdded(usize),             // index
    BookmarksDeletedCount(usize),     // count
    BookmarksHeader,
    NoBookmarks,

    // === QUICK NOTE MESSAGES ===
    QuickNoteAdded(usize),            // index
    QuickNotesDeletedCount(usize),    // count
    QuickNotesHeader,
    NoQuickNotes,

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigModuleDocument,

    // === PROMPTS ===
    PromptTaskName,
    PromptTaskNotes,
    PromptTaskHasDueDate,
    PromptTaskDueDate,
    PromptDefaultDocumentPath,
    PromptPrettyPrint,

    // === GENERAL MESSAGES ===
    OperationCancelled,
}
