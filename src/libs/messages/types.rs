#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    // === ENTRY MESSAGES ===
    EntryAdded,
    EntryMerged,
    ReceiptDate,
    ReceiptConsultant,
    ReceiptHours,
    ReceiptRate,
    ReceiptCost,
    ReceiptProject,
    ReceiptCustomer,
    ReceiptDescription,

    // === QUERY MESSAGES ===
    NoEntriesFound,
    NoEntriesForMonth(String), // "March 2024"
    EntriesWritten(usize, String), // count, path
    TotalHours(String),
    TotalCost(String),

    // === REPORT MESSAGES ===
    ReportTitle(String), // "March 2024"
    ReportSummaryHeader,
    ReportPerConsultant,
    ReportPerProject,
    ReportPerCustomer,

    // === ENTITY LIST MESSAGES ===
    NoConsultantsFound,
    NoCustomersFound,
    NoProjectsFound,

    // === CONFIGURATION MESSAGES ===
    ConfigHeader,
    ConfigNoDefaults,
    ConfigSetInstruction,
    ConfigDefaultConsultant(String),
    ConfigDefaultClient(String),
    ConfigDefaultProject(String),
    ConfigDefaultRate(String),
    ConfigLanguage(String),
    ConfigDatabaseHeader,
    ConfigDatabasePath(String),
    ConfigSaved,
    ConfigCleared,
    ConfigValueRequired,
    UnsupportedLanguage(String, String), // requested, supported
    ConfigReadFailed(String), // path
    ConfigSaveFailed(String), // path

    // === VALIDATION MESSAGES ===
    ConsultantRequired,
    CustomerRequired,
    ProjectRequired,
    DescriptionRequired,
    RateMustBePositive,
    HoursMustBePositive,
    InvalidDateFormat(String),  // offending input
    InvalidMonthFormat(String), // offending input
    WeekOutOfRange(u32),
    MonthOutOfRange(u32),
    YearOutOfRange(i32),
    UsageHint,

    // === STORE MESSAGES ===
    DbOpenFailed(String),      // path
    DbDirectoryFailed(String), // directory
    DbMigrationFailed,
    GetCreateConsultantFailed(String),
    GetCreateCustomerFailed(String),
    GetCreateProjectFailed(String),
    ReconcileEntryFailed,
    FetchEntriesFailed,
    ListEntitiesFailed,
    TransactionFailed,

    // === OUTPUT MESSAGES ===
    CreateOutputFileFailed(String), // path
    WriteTableFailed,
    WriteCsvFailed,
    WriteJsonFailed,
    WriteReportFailed,

    // === MIGRATION MESSAGES ===
    MigrationsFound(usize),
    RunningMigration(u32, String), // version, name
    MigrationCompleted(u32),
    MigrationFailed(u32, String), // version, error
    AllMigrationsCompleted,
    DatabaseVersion(u32, u32), // current, latest
    DatabaseUpToDate,
    DatabaseNeedsUpdate,
    PendingMigration(u32, String), // version, name
    NoMigrationsApplied,
}
