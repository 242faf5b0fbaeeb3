#[derive(Debug, Clone)]
pub enum Message {
    // === SESSION MESSAGES ===
    Welcome,
    Farewell,
    Intro(String),

    // === TASK MESSAGES ===
    TaskAdded(String),
    TaskRenamed,
    TaskDeleted,
    StatusesUpdated,
    AllCaughtUp,
    PendingHeader,
    NoTasksToManage,
    NoTasksToDelete,
    NoTasksMatchingFilter,
    NoCompletedOn(String),
    CompletedOnHeader(String),

    // === PROMPT MESSAGES ===
    PromptMainMenu,
    PromptUpsertSelect,
    PromptNewTaskName,
    PromptEditTaskName,
    PromptManageSelect,
    PromptSearchDate,
    PromptDeleteSelect,
    ConfirmDeleteTask(String),
    CreateNewTaskLabel,
    CreateNewTaskHint,
    HintCompleted,
    HintPending,
    HintDoneOn(String),

    // === VALIDATION MESSAGES ===
    EmptyTaskName,
    InvalidDateFormat,

    // === GENERIC MESSAGES ===
    OperationCancelled,
    UnexpectedError(String),
}
