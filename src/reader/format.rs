//! Column layouts of the Asta text export.
//!
//! Each table has a catalog of named, typed columns. A [`FileFormat`] pairs a
//! file version with the order in which that version writes each table's
//! columns.

use std::collections::HashMap;

use crate::datatype::ColumnType;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnDefinition {
    pub name: &'static str,
    pub column_type: ColumnType,
}

impl ColumnDefinition {
    pub const fn new(name: &'static str, column_type: ColumnType) -> Self {
        Self { name, column_type }
    }
}

/// A table as written by one file version. Slots without a definition are
/// read and discarded.
#[derive(Debug, Clone, PartialEq)]
pub struct TableDefinition {
    pub name: &'static str,
    pub columns: Vec<Option<ColumnDefinition>>,
}

impl TableDefinition {
    /// Lay out `catalog` columns in `order`. Names missing from the catalog leave an empty slot.
    pub fn new(name: &'static str, catalog: &[ColumnDefinition], order: &[&str]) -> Self {
        let columns = order
            .iter()
            .map(|column| catalog.iter().find(|c| c.name == *column).copied())
            .collect();
        Self { name, columns }
    }

    /// Catalog order, for tables whose layout did not change.
    pub fn from_catalog(name: &'static str, catalog: &[ColumnDefinition]) -> Self {
        Self {
            name,
            columns: catalog.iter().copied().map(Some).collect(),
        }
    }
}

/// Table layouts for one text export version, keyed by record type.
#[derive(Debug, Clone, PartialEq)]
pub struct FileFormat {
    pub version: i32,
    /// Timestamps are `days seconds` from the Asta epoch rather than `yyyyMMdd HHmmss`.
    pub epoch_dates: bool,
    tables: HashMap<i32, TableDefinition>,
}

impl FileFormat {
    pub fn new(version: i32, epoch_dates: bool) -> Self {
        Self {
            version,
            epoch_dates,
            tables: HashMap::new(),
        }
    }

    pub fn with_table(mut self, record_type: i32, table: TableDefinition) -> Self {
        self.tables.insert(record_type, table);
        self
    }

    pub fn table(&self, record_type: i32) -> Option<&TableDefinition> {
        self.tables.get(&record_type)
    }

    /// Layout written by PowerProject 9.0.06.
    pub fn v9006() -> Self {
        Self::new(9006, false)
            .with_table(2, TableDefinition::new("PROJECT_SUMMARY", PROJECT_SUMMARY_COLUMNS, V9006_PROJECT_SUMMARY_COLUMNS_ORDER))
            .with_table(7, TableDefinition::new("BAR", BAR_COLUMNS, V9006_BAR_COLUMNS_ORDER))
            .with_table(11, TableDefinition::new("CALENDAR", CALENDAR_COLUMNS, V9006_CALENDAR_COLUMNS_ORDER))
            .with_table(12, TableDefinition::new("EXCEPTIONN", EXCEPTIONN_COLUMNS, V9006_EXCEPTIONN_COLUMNS_ORDER))
            .with_table(14, TableDefinition::new("EXCEPTION_ASSIGNMENT", EXCEPTION_ASSIGNMENT_COLUMNS, V9006_EXCEPTION_ASSIGNMENT_COLUMNS_ORDER))
            .with_table(15, TableDefinition::new("TIME_ENTRY", TIME_ENTRY_COLUMNS, V9006_TIME_ENTRY_COLUMNS_ORDER))
            .with_table(17, TableDefinition::new("WORK_PATTERN", WORK_PATTERN_COLUMNS, V9006_WORK_PATTERN_COLUMNS_ORDER))
            .with_table(18, TableDefinition::from_catalog("TASK_COMPLETED_SECTION", TASK_COMPLETED_SECTION_COLUMNS))
            .with_table(21, TableDefinition::new("TASK", TASK_COLUMNS, V9006_TASK_COLUMNS_ORDER))
            .with_table(22, TableDefinition::new("MILESTONE", MILESTONE_COLUMNS, V9006_MILESTONE_COLUMNS_ORDER))
            .with_table(23, TableDefinition::new("EXPANDED_TASK", EXPANDED_TASK_COLUMNS, V9006_EXPANDED_TASK_COLUMNS_ORDER))
            .with_table(24, TableDefinition::from_catalog("HAMMOCK_TASK", HAMMOCK_TASK_COLUMNS))
            .with_table(25, TableDefinition::new("LINK", LINK_COLUMNS, V9006_LINK_COLUMNS_ORDER))
            .with_table(61, TableDefinition::new("CONSUMABLE_RESOURCE", CONSUMABLE_RESOURCE_COLUMNS, V9006_CONSUMABLE_RESOURCE_COLUMNS_ORDER))
            .with_table(62, TableDefinition::new("PERMANENT_RESOURCE", PERMANENT_RESOURCE_COLUMNS, V9006_PERMANENT_RESOURCE_COLUMNS_ORDER))
            .with_table(63, TableDefinition::new("PERM_RESOURCE_SKILL", PERMANENT_RESOURCE_SKILL_COLUMNS, V9006_PERMANENT_RESOURCE_SKILL_COLUMNS_ORDER))
            .with_table(67, TableDefinition::new("PERMANENT_SCHEDUL_ALLOCATION", PERMANENT_SCHEDULE_ALLOCATION_COLUMNS, V9006_PERMANENT_SCHEDULE_ALLOCATION_COLUMNS_ORDER))
            .with_table(190, TableDefinition::new("WBS_ENTRY", WBS_ENTRY_COLUMNS, V9006_WBS_ENTRY_COLUMNS_ORDER))
    }
}

/// Catalog columns of a table, by table name.
pub fn catalog(table: &str) -> Option<&'static [ColumnDefinition]> {
    let columns = match table {
        "PROJECT_SUMMARY" => PROJECT_SUMMARY_COLUMNS,
        "BAR" => BAR_COLUMNS,
        "CALENDAR" => CALENDAR_COLUMNS,
        "EXCEPTIONN" => EXCEPTIONN_COLUMNS,
        "EXCEPTION_ASSIGNMENT" => EXCEPTION_ASSIGNMENT_COLUMNS,
        "TIME_ENTRY" => TIME_ENTRY_COLUMNS,
        "WORK_PATTERN" => WORK_PATTERN_COLUMNS,
        "TASK_COMPLETED_SECTION" => TASK_COMPLETED_SECTION_COLUMNS,
        "TASK" => TASK_COLUMNS,
        "MILESTONE" => MILESTONE_COLUMNS,
        "EXPANDED_TASK" => EXPANDED_TASK_COLUMNS,
        "HAMMOCK_TASK" => HAMMOCK_TASK_COLUMNS,
        "LINK" => LINK_COLUMNS,
        "CONSUMABLE_RESOURCE" => CONSUMABLE_RESOURCE_COLUMNS,
        "PERMANENT_RESOURCE" => PERMANENT_RESOURCE_COLUMNS,
        "PERM_RESOURCE_SKILL" => PERMANENT_RESOURCE_SKILL_COLUMNS,
        "PERMANENT_SCHEDUL_ALLOCATION" => PERMANENT_SCHEDULE_ALLOCATION_COLUMNS,
        "WBS_ENTRY" => WBS_ENTRY_COLUMNS,
        _ => return None,
    };
    Some(columns)
}

// Column catalog
const PROJECT_SUMMARY_COLUMNS: &[ColumnDefinition] = &[
    ColumnDefinition::new("PROJECT_SUMMARYID", ColumnType::Integer),
    ColumnDefinition::new("DURATIONTYPF", ColumnType::Integer),
    ColumnDefinition::new("DURATIONELA_MONTHS", ColumnType::Integer),
    ColumnDefinition::new("DURATION", ColumnType::Double),
    ColumnDefinition::new("PROJECT_START", ColumnType::Timestamp),
    ColumnDefinition::new("PROJECT_END", ColumnType::Timestamp),
    ColumnDefinition::new("FISCAL_YEAR_START", ColumnType::Timestamp),
    ColumnDefinition::new("LAST_ID_USED_IN_BASELINE", ColumnType::Integer),
    ColumnDefinition::new("DS_ID_BOOKED_FROM", ColumnType::Integer),
    ColumnDefinition::new("WBN_CONSTRAINT", ColumnType::Integer),
    ColumnDefinition::new("WBN_RANGE_FROM", ColumnType::Integer),
    ColumnDefinition::new("WBN_RANGE_TO", ColumnType::Integer),
    ColumnDefinition::new("WBN_INCREMENT", ColumnType::Integer),
    ColumnDefinition::new("WBN_MINIMUM_WIDTH", ColumnType::Integer),
    ColumnDefinition::new("SPARF_INTEGER", ColumnType::Integer),
    ColumnDefinition::new("UTID_CONSTRAINT", ColumnType::Integer),
    ColumnDefinition::new("UTID_START_VALUE", ColumnType::Integer),
    ColumnDefinition::new("UTID_INCREMENT", ColumnType::Integer),
    ColumnDefinition::new("UTID_SUB_INCREMENT", ColumnType::Integer),
    ColumnDefinition::new("UTID_MINIMUM_WIDTH", ColumnType::Integer),
    ColumnDefinition::new("INITIAL_VIEW", ColumnType::Integer),
    ColumnDefinition::new("POINT_RELEASE", ColumnType::Integer),
    ColumnDefinition::new("TIMESHEET_PROJECT_ID", ColumnType::Integer),
    ColumnDefinition::new("LAST_ID_USED_IN_ARCHIVES", ColumnType::Integer),
    ColumnDefinition::new("PROJECT_VERSION", ColumnType::Integer),
    ColumnDefinition::new("STANDARD_WORK_MIN_FADE", ColumnType::Integer),
    ColumnDefinition::new("BOOKOUT_SET_UNIQUE_ID", ColumnType::Integer),
    ColumnDefinition::new("NUMBER_BOOKED_OUT_SETS", ColumnType::Integer),
    ColumnDefinition::new("SHORT_NAME", ColumnType::Varchar),
    ColumnDefinition::new("LONG_NAME", ColumnType::Varchar),
    ColumnDefinition::new("LOCAL_FILE_BOOKED_FROM", ColumnType::Varchar),
    ColumnDefinition::new("WBN_START_VALUE", ColumnType::Varchar),
    ColumnDefinition::new("WBN_PATHNAME_SEPARATOR", ColumnType::Varchar),
    ColumnDefinition::new("WBN_TASK_SEPARATOR", ColumnType::Varchar),
    ColumnDefinition::new("WBN_PREFIX", ColumnType::Varchar),
    ColumnDefinition::new("LAST_WBN_USED", ColumnType::Varchar),
    ColumnDefinition::new("PROJECT_FOR", ColumnType::Varchar),
    ColumnDefinition::new("PROJECT_BY", ColumnType::Varchar),
    ColumnDefinition::new("PATH_SEPARATOR", ColumnType::Varchar),
    ColumnDefinition::new("CHART_PATH_SEPARATOR", ColumnType::Varchar),
    ColumnDefinition::new("UTID_PREFIX", ColumnType::Varchar),
    ColumnDefinition::new("TIMESHEET_CONNECTION", ColumnType::Varchar),
    ColumnDefinition::new("WBS_PATH_SEPARATOR", ColumnType::Varchar),
    ColumnDefinition::new("PROJECT_GUID", ColumnType::Varchar),
    ColumnDefinition::new("DURATION_TIME_UNIT", ColumnType::Integer),
    ColumnDefinition::new("SECURITY_CODELIBRARY", ColumnType::Integer),
    ColumnDefinition::new("BOOKOUT_COUNTER", ColumnType::Integer),
    ColumnDefinition::new("PROGRESS_METHOD", ColumnType::Integer),
    ColumnDefinition::new("FORMULA_DATE_FORMAT", ColumnType::Integer),
    ColumnDefinition::new("WBN_ENABLED", ColumnType::Bit),
    ColumnDefinition::new("OLD_START_VALUE", ColumnType::Bit),
    ColumnDefinition::new("IGNORE_SATISFIED_COSTS", ColumnType::Bit),
    ColumnDefinition::new("UTID_ENABLE_SUB_INCREMENTS", ColumnType::Bit),
    ColumnDefinition::new("EXCLUSIVE_CUSTOM_TIME_UNITS", ColumnType::Bit),
    ColumnDefinition::new("IS_AN_ARCHIVE", ColumnType::Bit),
    ColumnDefinition::new("SORT_BY_SORT_ORDER", ColumnType::Bit),
    ColumnDefinition::new("USE_PROJECT_BASELINES_FOR_JP", ColumnType::Bit),
    ColumnDefinition::new("USE_ROLLED_UP_OPC_WEIGHTINGS", ColumnType::Bit),
    ColumnDefinition::new("DISPLAY_WBS_BY_CODE", ColumnType::Bit),
    ColumnDefinition::new("INHERIT_FROM_NEIGHBOUR", ColumnType::Bit),
    ColumnDefinition::new("LAST_EDITED_DATE", ColumnType::Timestamp),
    ColumnDefinition::new("LAST_EDITED_BY", ColumnType::Integer),
    ColumnDefinition::new("SCALE_SPR_FONTS_CONSISTENTLY", ColumnType::Integer),
];

const BAR_COLUMNS: &[ColumnDefinition] = &[
    ColumnDefinition::new("BARID", ColumnType::Integer),
    ColumnDefinition::new("BAR_START", ColumnType::Timestamp),
    ColumnDefinition::new("BAR_FINISH", ColumnType::Timestamp),
    ColumnDefinition::new("NATURAL_ORDER", ColumnType::Integer),
    ColumnDefinition::new("SPARI_INTEGER", ColumnType::Integer),
    ColumnDefinition::new("NAME", ColumnType::Varchar),
    ColumnDefinition::new("EXPANDED_TASK", ColumnType::Integer),
    ColumnDefinition::new("PRIORITY", ColumnType::Integer),
    ColumnDefinition::new("UNSCHEDULABLE", ColumnType::Bit),
    ColumnDefinition::new("MARK_FOR_HIDING", ColumnType::Bit),
    ColumnDefinition::new("TASKS_MAY_OVERLAP", ColumnType::Bit),
    ColumnDefinition::new("SUBPROJECT_ID", ColumnType::Integer),
    ColumnDefinition::new("ALT_ID", ColumnType::Integer),
    ColumnDefinition::new("LAST_EDITED_DATE", ColumnType::Timestamp),
    ColumnDefinition::new("LAST_EDITED_BY", ColumnType::Integer),
];

const CALENDAR_COLUMNS: &[ColumnDefinition] = &[
    ColumnDefinition::new("ID", ColumnType::Integer),
    ColumnDefinition::new("SPARL_INTEGER", ColumnType::Integer),
    ColumnDefinition::new("NAME", ColumnType::Varchar),
    ColumnDefinition::new("DOMINANT_WORK_PATTERN", ColumnType::Integer),
    ColumnDefinition::new("CALENDAR", ColumnType::Integer),
    ColumnDefinition::new("DISPLAY_THRESHOLD", ColumnType::Integer),
    ColumnDefinition::new("NO_WORKING_TIME_COLOUR", ColumnType::Integer),
    ColumnDefinition::new("WORKING_TIME_COLOUR", ColumnType::Integer),
    ColumnDefinition::new("NUMBERING", ColumnType::Integer),
    ColumnDefinition::new("SHOW_PAST_DATES", ColumnType::Bit),
    ColumnDefinition::new("ISO8601_WEEK_NUMBERING", ColumnType::Bit),
    ColumnDefinition::new("CREATED_AS_FOLDER", ColumnType::Bit),
    ColumnDefinition::new("ALT_ID", ColumnType::Integer),
    ColumnDefinition::new("LAST_EDITED_DATE", ColumnType::Timestamp),
    ColumnDefinition::new("LAST_EDITED_BY", ColumnType::Integer),
];

const EXCEPTIONN_COLUMNS: &[ColumnDefinition] = &[
    ColumnDefinition::new("ID", ColumnType::Integer),
    ColumnDefinition::new("ARR_STOUT_STAPPANDARROW_TYPE", ColumnType::Integer),
    ColumnDefinition::new("ARR_STOUT_STAPPANDLENGTH", ColumnType::Integer),
    ColumnDefinition::new("ARR_STOUT_STAPPANDEDGE", ColumnType::Integer),
    ColumnDefinition::new("ARR_STOUT_STAPPANDBORDET_COL", ColumnType::Integer),
    ColumnDefinition::new("ARR_STOUT_STAPPANDINSIDG_COL", ColumnType::Integer),
    ColumnDefinition::new("ARR_STOUT_STAPPANDPLACEMENW", ColumnType::Integer),
    ColumnDefinition::new("BLI_STOUT_STAPPANDBLIP_TYPE", ColumnType::Integer),
    ColumnDefinition::new("BLI_STOUT_STAPPANDSCALEY", ColumnType::Integer),
    ColumnDefinition::new("BLI_STOUT_STAPPANDSCALEZ", ColumnType::Integer),
    ColumnDefinition::new("BLI_STOUT_STAPPANDGAP", ColumnType::Integer),
    ColumnDefinition::new("BLI_STOUT_STAPPANDBORDES_COL", ColumnType::Integer),
    ColumnDefinition::new("BLI_STOUT_STAPPANDINSIDF_COL", ColumnType::Integer),
    ColumnDefinition::new("BLI_STOUT_STAPPANDPLACEMENV", ColumnType::Integer),
    ColumnDefinition::new("LIN_STOUT_STAPPANDSCALEX", ColumnType::Double),
    ColumnDefinition::new("LIN_STOUT_STAPPANDWIDTH", ColumnType::Integer),
    ColumnDefinition::new("LIN_STOUT_STAPPANDBORDER_COL", ColumnType::Integer),
    ColumnDefinition::new("LIN_STOUT_STAPPANDINSIDE_COL", ColumnType::Integer),
    ColumnDefinition::new("LIN_STOUT_STAPPANDLINE_TYPE", ColumnType::Integer),
    ColumnDefinition::new("APPANDFOREGROUND_FILL_COLOUR", ColumnType::Integer),
    ColumnDefinition::new("APPANDBACKGROUND_FILL_COLOUR", ColumnType::Integer),
    ColumnDefinition::new("APPANDPATTERN", ColumnType::Integer),
    ColumnDefinition::new("UNIQUE_BIT_FIELD", ColumnType::Integer),
    ColumnDefinition::new("NAML", ColumnType::Varchar),
    ColumnDefinition::new("TYPG", ColumnType::Integer),
    ColumnDefinition::new("ALT_ID", ColumnType::Integer),
    ColumnDefinition::new("LAST_EDITED_DATE", ColumnType::Timestamp),
    ColumnDefinition::new("LAST_EDITED_BY", ColumnType::Integer),
    ColumnDefinition::new("SORT_ORDER", ColumnType::Integer),
];

const EXCEPTION_ASSIGNMENT_COLUMNS: &[ColumnDefinition] = &[
    ColumnDefinition::new("EXCEPTION_ASSIGNMENTID", ColumnType::Integer),
    ColumnDefinition::new("ORDF", ColumnType::Integer),
    ColumnDefinition::new("START_DATE", ColumnType::Timestamp),
    ColumnDefinition::new("END_DATE", ColumnType::Timestamp),
    ColumnDefinition::new("EXCEPTIOO", ColumnType::Integer),
];

const TIME_ENTRY_COLUMNS: &[ColumnDefinition] = &[
    ColumnDefinition::new("TIME_ENTRYID", ColumnType::Integer),
    ColumnDefinition::new("EXCEPTION", ColumnType::Integer),
    ColumnDefinition::new("START_TIME", ColumnType::Time),
    ColumnDefinition::new("END_TIME", ColumnType::Time),
];

const WORK_PATTERN_COLUMNS: &[ColumnDefinition] = &[
    ColumnDefinition::new("ID", ColumnType::Integer),
    ColumnDefinition::new("DEFAULT_OFFSET", ColumnType::Integer),
    ColumnDefinition::new("NAME", ColumnType::Varchar),
    ColumnDefinition::new("DEFAULT_ALIGNMENT_DATE", ColumnType::Timestamp),
    ColumnDefinition::new("CREATED_AS_FOLDER", ColumnType::Bit),
    ColumnDefinition::new("ALT_ID", ColumnType::Integer),
    ColumnDefinition::new("LAST_EDITED_DATE", ColumnType::Timestamp),
    ColumnDefinition::new("LAST_EDITED_BY", ColumnType::Integer),
];

const TASK_COMPLETED_SECTION_COLUMNS: &[ColumnDefinition] = &[
    ColumnDefinition::new("ID", ColumnType::Integer),
    ColumnDefinition::new("NATURAM_ORDER", ColumnType::Integer),
    ColumnDefinition::new("OVERALL_PERCENT_COMPLETE", ColumnType::Double),
    ColumnDefinition::new("ACTUAL_TASK_WORK", ColumnType::Double),
    ColumnDefinition::new("TASK", ColumnType::Integer),
    ColumnDefinition::new("ACTUAL_START", ColumnType::Timestamp),
    ColumnDefinition::new("ACTUAL_END", ColumnType::Timestamp),
    ColumnDefinition::new("SPAUE_INTEGER", ColumnType::Integer),
    ColumnDefinition::new("DURATIOTTYPF", ColumnType::Integer),
    ColumnDefinition::new("DURATIOTELA_MONTHS", ColumnType::Integer),
    ColumnDefinition::new("DURATIOTHOURS", ColumnType::Double),
    ColumnDefinition::new("LINKABLE_START", ColumnType::Timestamp),
    ColumnDefinition::new("LINKABLE_FINISH", ColumnType::Timestamp),
    ColumnDefinition::new("DURATION_TIME_UNIT", ColumnType::Integer),
    ColumnDefinition::new("UNSCHEDULABLG", ColumnType::Integer),
    ColumnDefinition::new("SUBPROJECT_ID", ColumnType::Integer),
    ColumnDefinition::new("ALT_ID", ColumnType::Integer),
    ColumnDefinition::new("LAST_EDITED_DATE", ColumnType::Timestamp),
    ColumnDefinition::new("LAST_EDITED_BY", ColumnType::Integer),
];

const TASK_COLUMNS: &[ColumnDefinition] = &[
    ColumnDefinition::new("TASKID", ColumnType::Integer),
    ColumnDefinition::new("GIVEN_DURATIONTYPF", ColumnType::Integer),
    ColumnDefinition::new("GIVEN_DURATIONELA_MONTHS", ColumnType::Integer),
    ColumnDefinition::new("GIVEN_DURATION", ColumnType::Double),
    ColumnDefinition::new("RESUME", ColumnType::Timestamp),
    ColumnDefinition::new("GIVEN_START", ColumnType::Timestamp),
    ColumnDefinition::new("LATEST_PROGRESS_PERIOD", ColumnType::Integer),
    ColumnDefinition::new("TASK_WORK_RATE_TIME_UNIT", ColumnType::Integer),
    ColumnDefinition::new("TASK_WORK_RATE", ColumnType::Double),
    ColumnDefinition::new("PLACEMENT", ColumnType::Integer),
    ColumnDefinition::new("BEEN_SPLIT", ColumnType::Bit),
    ColumnDefinition::new("INTERRUPTIBLE", ColumnType::Bit),
    ColumnDefinition::new("HOLDING_PIN", ColumnType::Bit),
    ColumnDefinition::new("ACTUAL_DURATIONTYPF", ColumnType::Integer),
    ColumnDefinition::new("ACTUAL_DURATIONELA_MONTHS", ColumnType::Integer),
    ColumnDefinition::new("ACTUAL_DURATION", ColumnType::Double),
    ColumnDefinition::new("EARLY_START_DATE", ColumnType::Timestamp),
    ColumnDefinition::new("LATE_START_DATE", ColumnType::Timestamp),
    ColumnDefinition::new("FREE_START_DATE", ColumnType::Timestamp),
    ColumnDefinition::new("START_CONSTRAINT_DATE", ColumnType::Timestamp),
    ColumnDefinition::new("END_CONSTRAINT_DATE", ColumnType::Timestamp),
    ColumnDefinition::new("EFFORT_BUDGET", ColumnType::Double),
    ColumnDefinition::new("NATURAL_ORDER", ColumnType::Integer),
    ColumnDefinition::new("LOGICAL_PRECEDENCE", ColumnType::Integer),
    ColumnDefinition::new("SPAVE_INTEGER", ColumnType::Integer),
    ColumnDefinition::new("SWIM_LANE", ColumnType::Integer),
    ColumnDefinition::new("USER_PERCENT_COMPLETE", ColumnType::Double),
    ColumnDefinition::new("OVERALL_PERCENT_COMPLETE", ColumnType::Double),
    ColumnDefinition::new("OVERALL_PERCENT_COMPL_WEIGHT", ColumnType::Double),
    ColumnDefinition::new("NAME", ColumnType::Varchar),
    ColumnDefinition::new("WBN_CODE", ColumnType::Varchar),
    ColumnDefinition::new("NOTES", ColumnType::Varchar),
    ColumnDefinition::new("UNIQUE_TASK_ID", ColumnType::Varchar),
    ColumnDefinition::new("CALENDAR", ColumnType::Integer),
    ColumnDefinition::new("WBS", ColumnType::Integer),
    ColumnDefinition::new("EFFORT_TIMI_UNIT", ColumnType::Integer),
    ColumnDefinition::new("WORL_UNIT", ColumnType::Integer),
    ColumnDefinition::new("LATEST_ALLOC_PROGRESS_PERIOD", ColumnType::Integer),
    ColumnDefinition::new("WORN", ColumnType::Double),
    ColumnDefinition::new("BAR", ColumnType::Integer),
    ColumnDefinition::new("CONSTRAINT_FLAG", ColumnType::Integer),
    ColumnDefinition::new("PRIORITB", ColumnType::Integer),
    ColumnDefinition::new("CRITICAM", ColumnType::Bit),
    ColumnDefinition::new("USE_PARENU_CALENDAR", ColumnType::Bit),
    ColumnDefinition::new("BUFFER_TASK", ColumnType::Bit),
    ColumnDefinition::new("MARK_FOS_HIDING", ColumnType::Bit),
    ColumnDefinition::new("OWNED_BY_TIMESHEEV_X", ColumnType::Bit),
    ColumnDefinition::new("START_ON_NEX_DAY", ColumnType::Bit),
    ColumnDefinition::new("LONGEST_PATH", ColumnType::Bit),
    ColumnDefinition::new("DURATIOTTYPF", ColumnType::Integer),
    ColumnDefinition::new("DURATIOTELA_MONTHS", ColumnType::Integer),
    ColumnDefinition::new("DURATIOTHOURS", ColumnType::Double),
    ColumnDefinition::new("LINKABLE_START", ColumnType::Timestamp),
    ColumnDefinition::new("LINKABLE_FINISH", ColumnType::Timestamp),
    ColumnDefinition::new("DURATION_TIME_UNIT", ColumnType::Integer),
    ColumnDefinition::new("UNSCHEDULABLG", ColumnType::Bit),
    ColumnDefinition::new("SUBPROJECT_ID", ColumnType::Integer),
    ColumnDefinition::new("ALT_ID", ColumnType::Integer),
    ColumnDefinition::new("LAST_EDITED_DATE", ColumnType::Timestamp),
    ColumnDefinition::new("LAST_EDITED_BY", ColumnType::Integer),
    ColumnDefinition::new("IFC_PRODUCT_SET", ColumnType::Integer),
    ColumnDefinition::new("IFC_TASK_TYPE", ColumnType::Integer),
];

const MILESTONE_COLUMNS: &[ColumnDefinition] = &[
    ColumnDefinition::new("MILESTONEID", ColumnType::Integer),
    ColumnDefinition::new("GIVEN_DATE_TIME", ColumnType::Timestamp),
    ColumnDefinition::new("PROGREST_PERIOD", ColumnType::Integer),
    ColumnDefinition::new("SYMBOL_APPEARANCE", ColumnType::Integer),
    ColumnDefinition::new("MILESTONE_TYPE", ColumnType::Integer),
    ColumnDefinition::new("PLACEMENU", ColumnType::Integer),
    ColumnDefinition::new("COMPLETED", ColumnType::Bit),
    ColumnDefinition::new("INTERRUPTIBLE_X", ColumnType::Bit),
    ColumnDefinition::new("ACTUAL_DURATIONTYPF", ColumnType::Integer),
    ColumnDefinition::new("ACTUAL_DURATIONELA_MONTHS", ColumnType::Integer),
    ColumnDefinition::new("ACTUAL_DURATION", ColumnType::Double),
    ColumnDefinition::new("EARLY_START_DATE", ColumnType::Timestamp),
    ColumnDefinition::new("LATE_START_DATE", ColumnType::Timestamp),
    ColumnDefinition::new("FREE_START_DATE", ColumnType::Timestamp),
    ColumnDefinition::new("START_CONSTRAINT_DATE", ColumnType::Timestamp),
    ColumnDefinition::new("END_CONSTRAINT_DATE", ColumnType::Timestamp),
    ColumnDefinition::new("EFFORT_BUDGET", ColumnType::Double),
    ColumnDefinition::new("NATURAL_ORDER", ColumnType::Integer),
    ColumnDefinition::new("LOGICAL_PRECEDENCE", ColumnType::Integer),
    ColumnDefinition::new("SPAVE_INTEGER", ColumnType::Integer),
    ColumnDefinition::new("SWIM_LANE", ColumnType::Integer),
    ColumnDefinition::new("USER_PERCENT_COMPLETE", ColumnType::Double),
    ColumnDefinition::new("OVERALL_PERCENT_COMPLETE", ColumnType::Double),
    ColumnDefinition::new("OVERALL_PERCENT_COMPL_WEIGHT", ColumnType::Double),
    ColumnDefinition::new("NAME", ColumnType::Varchar),
    ColumnDefinition::new("WBN_CODE", ColumnType::Varchar),
    ColumnDefinition::new("NOTES", ColumnType::Varchar),
    ColumnDefinition::new("UNIQUE_TASK_ID", ColumnType::Varchar),
    ColumnDefinition::new("CALENDAR", ColumnType::Integer),
    ColumnDefinition::new("WBS", ColumnType::Integer),
    ColumnDefinition::new("EFFORT_TIMI_UNIT", ColumnType::Integer),
    ColumnDefinition::new("WORL_UNIT", ColumnType::Integer),
    ColumnDefinition::new("LATEST_ALLOC_PROGRESS_PERIOD", ColumnType::Integer),
    ColumnDefinition::new("WORN", ColumnType::Double),
    ColumnDefinition::new("BAR", ColumnType::Integer),
    ColumnDefinition::new("CONSTRAINT_FLAG", ColumnType::Integer),
    ColumnDefinition::new("PRIORITB", ColumnType::Integer),
    ColumnDefinition::new("CRITICAM", ColumnType::Bit),
    ColumnDefinition::new("USE_PARENU_CALENDAR", ColumnType::Bit),
    ColumnDefinition::new("BUFFER_TASK", ColumnType::Bit),
    ColumnDefinition::new("MARK_FOS_HIDING", ColumnType::Bit),
    ColumnDefinition::new("OWNED_BY_TIMESHEEV_X", ColumnType::Bit),
    ColumnDefinition::new("START_ON_NEX_DAY", ColumnType::Bit),
    ColumnDefinition::new("LONGEST_PATH", ColumnType::Bit),
    ColumnDefinition::new("DURATIOTTYPF", ColumnType::Integer),
    ColumnDefinition::new("DURATIOTELA_MONTHS", ColumnType::Integer),
    ColumnDefinition::new("DURATIOTHOURS", ColumnType::Double),
    ColumnDefinition::new("LINKABLE_START", ColumnType::Timestamp),
    ColumnDefinition::new("LINKABLE_FINISH", ColumnType::Timestamp),
    ColumnDefinition::new("DURATION_TIME_UNIT", ColumnType::Integer),
    ColumnDefinition::new("UNSCHEDULABLG", ColumnType::Bit),
    ColumnDefinition::new("SUBPROJECT_ID", ColumnType::Integer),
    ColumnDefinition::new("ALT_ID", ColumnType::Integer),
    ColumnDefinition::new("LAST_EDITED_DATE", ColumnType::Timestamp),
    ColumnDefinition::new("LAST_EDITED_BY", ColumnType::Integer),
    ColumnDefinition::new("IFC_PRODUCT_SET", ColumnType::Integer),
    ColumnDefinition::new("IFC_TASK_TYPE", ColumnType::Integer),
];

const EXPANDED_TASK_COLUMNS: &[ColumnDefinition] = &[
    ColumnDefinition::new("EXPANDED_TASKID", ColumnType::Integer),
    ColumnDefinition::new("VAR_DATE1COMM_ATTSFIXED_DATE", ColumnType::Timestamp),
    ColumnDefinition::new("VAR_DATE1COMM_ATTSBASE_DATE", ColumnType::Integer),
    ColumnDefinition::new("VAR_DATE2COMM_ATTSFIXED_DATE", ColumnType::Timestamp),
    ColumnDefinition::new("VAR_DATE2COMM_ATTSBASE_DATE", ColumnType::Integer),
    ColumnDefinition::new("VAR_DATE3COMM_ATTSFIXED_DATE", ColumnType::Timestamp),
    ColumnDefinition::new("VAR_DATE3COMM_ATTSBASE_DATE", ColumnType::Integer),
    ColumnDefinition::new("COMM_ATTSSCALE1", ColumnType::Double),
    ColumnDefinition::new("COMM_ATTSSCALE2", ColumnType::Double),
    ColumnDefinition::new("COMM_ATTSSCALE3", ColumnType::Double),
    ColumnDefinition::new("COMM_ATTSNSCALES", ColumnType::Integer),
    ColumnDefinition::new("PERCENTAGE_LIKELIHOOD", ColumnType::Double),
    ColumnDefinition::new("PROJ_RISK", ColumnType::Double),
    ColumnDefinition::new("PROJ_PRIORITY", ColumnType::Double),
    ColumnDefinition::new("SUM_WEIGHTS", ColumnType::Double),
    ColumnDefinition::new("ISSUE_DATE", ColumnType::Timestamp),
    ColumnDefinition::new("REVISION_DATE", ColumnType::Timestamp),
    ColumnDefinition::new("PROJECT_BASELINE_ID", ColumnType::Integer),
    ColumnDefinition::new("DRAWN_BY", ColumnType::Varchar),
    ColumnDefinition::new("REVISION_COMMENT", ColumnType::Varchar),
    ColumnDefinition::new("CHART_MANAGER", ColumnType::Varchar),
    ColumnDefinition::new("REVISION_NUMBER", ColumnType::Varchar),
    ColumnDefinition::new("PROGRAMME_NUMBER", ColumnType::Varchar),
    ColumnDefinition::new("COMMENU", ColumnType::Varchar),
    ColumnDefinition::new("PROJ_TYPE", ColumnType::Varchar),
    ColumnDefinition::new("PROJ_STATUS", ColumnType::Varchar),
    ColumnDefinition::new("PROGRESU_PERIOD", ColumnType::Integer),
    ColumnDefinition::new("MANAGER_RESOURCE", ColumnType::Integer),
    ColumnDefinition::new("TYPH", ColumnType::Integer),
    ColumnDefinition::new("TAG_FIELD", ColumnType::Integer),
    ColumnDefinition::new("IS_PROJECT", ColumnType::Bit),
    ColumnDefinition::new("CONTAINS_PROJECTS", ColumnType::Bit),
    ColumnDefinition::new("CUMULATIVH_COSTCURRENCZ", ColumnType::Integer),
    ColumnDefinition::new("CUMULATIVH_COSTAMOUNT", ColumnType::Double),
    ColumnDefinition::new("CUMULATIVH_INCOMECURRENCZ", ColumnType::Integer),
    ColumnDefinition::new("CUMULATIVH_INCOMEAMOUNT", ColumnType::Double),
    ColumnDefinition::new("CUMULATIVE_ACTU_COSTCURRENCZ", ColumnType::Integer),
    ColumnDefinition::new("CUMULATIVE_ACTU_COSTAMOUNT", ColumnType::Double),
    ColumnDefinition::new("CUMULATIV_DURATIONTYPF", ColumnType::Integer),
    ColumnDefinition::new("CUMULATIV_DURATIONELA_MONTHS", ColumnType::Integer),
    ColumnDefinition::new("CUMULATIV_DURATIONHOURS", ColumnType::Double),
    ColumnDefinition::new("ACTUAL_CU_DURATIONTYPF", ColumnType::Integer),
    ColumnDefinition::new("ACTUAL_CU_DURATIONELA_MONTHS", ColumnType::Integer),
    ColumnDefinition::new("ACTUAL_CU_DURATIONHOURS", ColumnType::Double),
    ColumnDefinition::new("ACTUAL_CUMULATIVE_QUANTITY", ColumnType::Double),
    ColumnDefinition::new("CUMULATIVE_QUANTIT_REMAINING", ColumnType::Double),
    ColumnDefinition::new("CUMULATIVE_EFFORT_P_COMPLETE", ColumnType::Double),
    ColumnDefinition::new("CUMULATIVE_WORK_PER_COMPLETE", ColumnType::Double),
    ColumnDefinition::new("CUMULATIVE_QUANTITY_COMPLETE", ColumnType::Double),
    ColumnDefinition::new("MILESTONE_PERCENT_COMPLETE", ColumnType::Double),
    ColumnDefinition::new("FIRST_PREFERRED_START", ColumnType::Timestamp),
    ColumnDefinition::new("CALCULATED_PROGRESS_DATE", ColumnType::Timestamp),
    ColumnDefinition::new("EARLIEST_PROGRESS_DATE", ColumnType::Timestamp),
    ColumnDefinition::new("LATEST_PROGRESS_DATE", ColumnType::Timestamp),
    ColumnDefinition::new("EARLY_END_DATE_RT", ColumnType::Timestamp),
    ColumnDefinition::new("LATE_END_DATE_RT", ColumnType::Timestamp),
    ColumnDefinition::new("FREE_END_DATE_RT", ColumnType::Timestamp),
    ColumnDefinition::new("CUMULATIVE_DEMANE_EFFORT", ColumnType::Double),
    ColumnDefinition::new("CUMULATIVE_SCHEDULEE_EFFORT", ColumnType::Double),
    ColumnDefinition::new("ACTUAL_CUMULATIVF_EFFORT", ColumnType::Double),
    ColumnDefinition::new("CUMULATIVE_EFFORU_REMAINING", ColumnType::Double),
    ColumnDefinition::new("ACTUAL_CUMULATIVE_WORK", ColumnType::Double),
    ColumnDefinition::new("CUMULATIVE_WORK_REMAINING", ColumnType::Double),
    ColumnDefinition::new("MILESTONES_DONE", ColumnType::Integer),
    ColumnDefinition::new("MILESTONES_REMAINING", ColumnType::Integer),
    ColumnDefinition::new("CUMULATIVE_EFFORT_TIME_UNIT", ColumnType::Integer),
    ColumnDefinition::new("CUMULATIVE_LATEST_PRO_PERIOD", ColumnType::Integer),
    ColumnDefinition::new("ACTUAL_DURATIONTYPF", ColumnType::Integer),
    ColumnDefinition::new("ACTUAL_DURATIONELA_MONTHS", ColumnType::Integer),
    ColumnDefinition::new("ACTUAL_DURATION", ColumnType::Double),
    ColumnDefinition::new("EARLY_START_DATE", ColumnType::Timestamp),
    ColumnDefinition::new("LATE_START_DATE", ColumnType::Timestamp),
    ColumnDefinition::new("FREE_START_DATE", ColumnType::Timestamp),
    ColumnDefinition::new("START_CONSTRAINT_DATE", ColumnType::Timestamp),
    ColumnDefinition::new("END_CONSTRAINT_DATE", ColumnType::Timestamp),
    ColumnDefinition::new("EFFORT_BUDGET", ColumnType::Double),
    ColumnDefinition::new("NATURAL_ORDER", ColumnType::Integer),
    ColumnDefinition::new("LOGICAL_PRECEDENCE", ColumnType::Integer),
    ColumnDefinition::new("SPAVE_INTEGER", ColumnType::Integer),
    ColumnDefinition::new("SWIM_LANE", ColumnType::Integer),
    ColumnDefinition::new("USER_PERCENT_COMPLETE", ColumnType::Double),
    ColumnDefinition::new("OVERALL_PERCENT_COMPLETE", ColumnType::Double),
    ColumnDefinition::new("OVERALL_PERCENT_COMPL_WEIGHT", ColumnType::Double),
    ColumnDefinition::new("NAME", ColumnType::Varchar),
    ColumnDefinition::new("WBN_CODE", ColumnType::Varchar),
    ColumnDefinition::new("NOTES", ColumnType::Varchar),
    ColumnDefinition::new("UNIQUE_TASK_ID", ColumnType::Varchar),
    ColumnDefinition::new("CALENDAR", ColumnType::Integer),
    ColumnDefinition::new("WBS", ColumnType::Integer),
    ColumnDefinition::new("EFFORT_TIMI_UNIT", ColumnType::Integer),
    ColumnDefinition::new("WORL_UNIT", ColumnType::Integer),
    ColumnDefinition::new("LATEST_ALLOC_PROGRESS_PERIOD", ColumnType::Integer),
    ColumnDefinition::new("WORN", ColumnType::Double),
    ColumnDefinition::new("BAR", ColumnType::Integer),
    ColumnDefinition::new("CONSTRAINT_FLAG", ColumnType::Integer),
    ColumnDefinition::new("PRIORITB", ColumnType::Integer),
    ColumnDefinition::new("CRITICAM", ColumnType::Bit),
    ColumnDefinition::new("USE_PARENU_CALENDAR", ColumnType::Bit),
    ColumnDefinition::new("BUFFER_TASK", ColumnType::Bit),
    ColumnDefinition::new("MARK_FOS_HIDING", ColumnType::Bit),
    ColumnDefinition::new("OWNED_BY_TIMESHEEV_X", ColumnType::Bit),
    ColumnDefinition::new("START_ON_NEX_DAY", ColumnType::Bit),
    ColumnDefinition::new("LONGEST_PATH", ColumnType::Bit),
    ColumnDefinition::new("DURATIOTTYPF", ColumnType::Integer),
    ColumnDefinition::new("DURATIOTELA_MONTHS", ColumnType::Integer),
    ColumnDefinition::new("DURATIOTHOURS", ColumnType::Double),
    ColumnDefinition::new("LINKABLE_START", ColumnType::Timestamp),
    ColumnDefinition::new("LINKABLE_FINISH", ColumnType::Timestamp),
    ColumnDefinition::new("DURATION_TIME_UNIT", ColumnType::Integer),
    ColumnDefinition::new("UNSCHEDULABLG", ColumnType::Bit),
    ColumnDefinition::new("SUBPROJECT_ID", ColumnType::Integer),
    ColumnDefinition::new("ALT_ID", ColumnType::Integer),
    ColumnDefinition::new("LAST_EDITED_DATE", ColumnType::Timestamp),
    ColumnDefinition::new("LAST_EDITED_BY", ColumnType::Integer),
    ColumnDefinition::new("NUMBER_OF_ACTIVITIES", ColumnType::Integer),
    ColumnDefinition::new("ONLY_PM_MAY_APPROVE", ColumnType::Bit),
    ColumnDefinition::new("IFC_PRODUCT_SET", ColumnType::Integer),
    ColumnDefinition::new("IFC_TASK_TYPE", ColumnType::Integer),
];

const HAMMOCK_TASK_COLUMNS: &[ColumnDefinition] = &[
    ColumnDefinition::new("HAMMOCK_TASKID", ColumnType::Integer),
    ColumnDefinition::new("CUMULATIVH_COSTCURRENCZ", ColumnType::Integer),
    ColumnDefinition::new("CUMULATIVH_COSTAMOUNT", ColumnType::Double),
    ColumnDefinition::new("CUMULATIVH_INCOMECURRENCZ", ColumnType::Integer),
    ColumnDefinition::new("CUMULATIVH_INCOMEAMOUNT", ColumnType::Double),
    ColumnDefinition::new("CUMULATIVE_ACTU_COSTCURRENCZ", ColumnType::Integer),
    ColumnDefinition::new("CUMULATIVE_ACTU_COSTAMOUNT", ColumnType::Double),
    ColumnDefinition::new("CUMULATIV_DURATIONTYPF", ColumnType::Integer),
    ColumnDefinition::new("CUMULATIV_DURATIONELA_MONTHS", ColumnType::Integer),
    ColumnDefinition::new("CUMULATIV_DURATIONHOURS", ColumnType::Double),
    ColumnDefinition::new("ACTUAL_CU_DURATIONTYPF", ColumnType::Integer),
    ColumnDefinition::new("ACTUAL_CU_DURATIONELA_MONTHS", ColumnType::Integer),
    ColumnDefinition::new("ACTUAL_CU_DURATIONHOURS", ColumnType::Double),
    ColumnDefinition::new("ACTUAL_CUMULATIVE_QUANTITY", ColumnType::Double),
    ColumnDefinition::new("CUMULATIVE_QUANTIT_REMAINING", ColumnType::Double),
    ColumnDefinition::new("CUMULATIVE_EFFORT_P_COMPLETE", ColumnType::Double),
    ColumnDefinition::new("CUMULATIVE_WORK_PER_COMPLETE", ColumnType::Double),
    ColumnDefinition::new("CUMULATIVE_QUANTITY_COMPLETE", ColumnType::Double),
    ColumnDefinition::new("MILESTONE_PERCENT_COMPLETE", ColumnType::Double),
    ColumnDefinition::new("FIRST_PREFERRED_START", ColumnType::Timestamp),
    ColumnDefinition::new("CALCULATED_PROGRESS_DATE", ColumnType::Timestamp),
    ColumnDefinition::new("EARLIEST_PROGRESS_DATE", ColumnType::Timestamp),
    ColumnDefinition::new("LATEST_PROGRESS_DATE", ColumnType::Timestamp),
    ColumnDefinition::new("EARLY_END_DATE_RT", ColumnType::Timestamp),
    ColumnDefinition::new("LATE_END_DATE_RT", ColumnType::Timestamp),
    ColumnDefinition::new("FREE_END_DATE_RT", ColumnType::Timestamp),
    ColumnDefinition::new("CUMULATIVE_DEMANE_EFFORT", ColumnType::Double),
    ColumnDefinition::new("CUMULATIVE_SCHEDULEE_EFFORT", ColumnType::Double),
    ColumnDefinition::new("ACTUAL_CUMULATIVF_EFFORT", ColumnType::Double),
    ColumnDefinition::new("CUMULATIVE_EFFORU_REMAINING", ColumnType::Double),
    ColumnDefinition::new("ACTUAL_CUMULATIVE_WORK", ColumnType::Double),
    ColumnDefinition::new("CUMULATIVE_WORK_REMAINING", ColumnType::Double),
    ColumnDefinition::new("MILESTONES_DONE", ColumnType::Integer),
    ColumnDefinition::new("MILESTONES_REMAINING", ColumnType::Integer),
    ColumnDefinition::new("CUMULATIVE_EFFORT_TIME_UNIT", ColumnType::Integer),
    ColumnDefinition::new("CUMULATIVE_LATEST_PRO_PERIOD", ColumnType::Integer),
    ColumnDefinition::new("ACTUAL_DURATIONTYPF", ColumnType::Integer),
    ColumnDefinition::new("ACTUAL_DURATIONELA_MONTHS", ColumnType::Integer),
    ColumnDefinition::new("ACTUAL_DURATION", ColumnType::Double),
    ColumnDefinition::new("EARLY_START_DATE", ColumnType::Timestamp),
    ColumnDefinition::new("LATE_START_DATE", ColumnType::Timestamp),
    ColumnDefinition::new("FREE_START_DATE", ColumnType::Timestamp),
    ColumnDefinition::new("START_CONSTRAINT_DATE", ColumnType::Timestamp),
    ColumnDefinition::new("END_CONSTRAINT_DATE", ColumnType::Timestamp),
    ColumnDefinition::new("EFFORT_BUDGET", ColumnType::Double),
    ColumnDefinition::new("NATURAL_ORDER", ColumnType::Integer),
    ColumnDefinition::new("LOGICAL_PRECEDENCE", ColumnType::Integer),
    ColumnDefinition::new("SPAVE_INTEGER", ColumnType::Integer),
    ColumnDefinition::new("SWIM_LANE", ColumnType::Integer),
    ColumnDefinition::new("USER_PERCENT_COMPLETE", ColumnType::Double),
    ColumnDefinition::new("OVERALL_PERCENT_COMPLETE", ColumnType::Double),
    ColumnDefinition::new("OVERALL_PERCENT_COMPL_WEIGHT", ColumnType::Double),
    ColumnDefinition::new("NAME", ColumnType::Varchar),
    ColumnDefinition::new("WBN_CODE", ColumnType::Varchar),
    ColumnDefinition::new("NOTES", ColumnType::Varchar),
    ColumnDefinition::new("UNIQUE_TASK_ID", ColumnType::Varchar),
    ColumnDefinition::new("CALENDAR", ColumnType::Integer),
    ColumnDefinition::new("WBS", ColumnType::Integer),
    ColumnDefinition::new("EFFORT_TIMI_UNIT", ColumnType::Integer),
    ColumnDefinition::new("WORL_UNIT", ColumnType::Integer),
    ColumnDefinition::new("LATEST_ALLOC_PROGRESS_PERIOD", ColumnType::Integer),
    ColumnDefinition::new("WORN", ColumnType::Double),
    ColumnDefinition::new("BAR", ColumnType::Integer),
    ColumnDefinition::new("CONSTRAINT_FLAG", ColumnType::Integer),
    ColumnDefinition::new("PRIORITB", ColumnType::Integer),
    ColumnDefinition::new("CRITICAM", ColumnType::Bit),
    ColumnDefinition::new("USE_PARENU_CALENDAR", ColumnType::Bit),
    ColumnDefinition::new("BUFFER_TASK", ColumnType::Bit),
    ColumnDefinition::new("MARK_FOS_HIDING", ColumnType::Bit),
    ColumnDefinition::new("OWNED_BY_TIMESHEEV_X", ColumnType::Bit),
    ColumnDefinition::new("START_ON_NEX_DAY", ColumnType::Bit),
    ColumnDefinition::new("LONGEST_PATH", ColumnType::Bit),
    ColumnDefinition::new("DURATIOTTYPF", ColumnType::Integer),
    ColumnDefinition::new("DURATIOTELA_MONTHS", ColumnType::Integer),
    ColumnDefinition::new("DURATIOTHOURS", ColumnType::Double),
    ColumnDefinition::new("LINKABLE_START", ColumnType::Timestamp),
    ColumnDefinition::new("LINKABLE_FINISH", ColumnType::Timestamp),
    ColumnDefinition::new("DURATION_TIME_UNIT", ColumnType::Integer),
    ColumnDefinition::new("UNSCHEDULABLG", ColumnType::Bit),
    ColumnDefinition::new("SUBPROJECT_ID", ColumnType::Integer),
    ColumnDefinition::new("ALT_ID", ColumnType::Integer),
    ColumnDefinition::new("LAST_EDITED_DATE", ColumnType::Timestamp),
    ColumnDefinition::new("LAST_EDITED_BY", ColumnType::Integer),
    ColumnDefinition::new("IFC_PRODUCT_SET", ColumnType::Integer),
    ColumnDefinition::new("IFC_TASK_TYPE", ColumnType::Integer),
];

const LINK_COLUMNS: &[ColumnDefinition] = &[
    ColumnDefinition::new("ID", ColumnType::Integer),
    ColumnDefinition::new("START_LAG_TIMETYPF", ColumnType::Integer),
    ColumnDefinition::new("START_LAG_TIMEELA_MONTHS", ColumnType::Integer),
    ColumnDefinition::new("START_LAG_TIME", ColumnType::Double),
    ColumnDefinition::new("END_LAG_TIMETYPF", ColumnType::Integer),
    ColumnDefinition::new("END_LAG_TIMEELA_MONTHS", ColumnType::Integer),
    ColumnDefinition::new("END_LAG_TIME", ColumnType::Double),
    ColumnDefinition::new("MAXIMUM_LAGTYPF", ColumnType::Integer),
    ColumnDefinition::new("MAXIMUM_LAGELA_MONTHS", ColumnType::Integer),
    ColumnDefinition::new("MAXIMUM_LAGHOURS", ColumnType::Double),
    ColumnDefinition::new("STARV_DATE", ColumnType::Timestamp),
    ColumnDefinition::new("ENF_DATE", ColumnType::Timestamp),
    ColumnDefinition::new("CURVATURE_PERCENTAGE", ColumnType::Integer),
    ColumnDefinition::new("START_LAG_PERCENT_FLOAT", ColumnType::Double),
    ColumnDefinition::new("END_LAG_PERCENT_FLOAT", ColumnType::Double),
    ColumnDefinition::new("COMMENTS", ColumnType::Varchar),
    ColumnDefinition::new("LINK_CATEGORY", ColumnType::Integer),
    ColumnDefinition::new("START_LAG_TIME_UNIT", ColumnType::Integer),
    ColumnDefinition::new("END_LAG_TIME_UNIT", ColumnType::Integer),
    ColumnDefinition::new("MAXIMUM_LAG_TIME_UNIT", ColumnType::Integer),
    ColumnDefinition::new("START_TASK", ColumnType::Integer),
    ColumnDefinition::new("END_TASK", ColumnType::Integer),
    ColumnDefinition::new("LINK_KIND", ColumnType::Integer),
    ColumnDefinition::new("START_LAG_TYPE", ColumnType::Integer),
    ColumnDefinition::new("END_LAG_TYPE", ColumnType::Integer),
    ColumnDefinition::new("MAINTAIN_TASK_OFFSETS", ColumnType::Integer),
    ColumnDefinition::new("UNSCHEDULABLF", ColumnType::Bit),
    ColumnDefinition::new("CRITICAL", ColumnType::Bit),
    ColumnDefinition::new("ON_LOOP", ColumnType::Bit),
    ColumnDefinition::new("MAXIMUM_LAG_MODE", ColumnType::Bit),
    ColumnDefinition::new("ANNOTATE_LEAD_LAG", ColumnType::Bit),
    ColumnDefinition::new("START_REPOSITION_ON_TAS_MOVE", ColumnType::Bit),
    ColumnDefinition::new("END_REPOSITION_ON_TASK_MOVE", ColumnType::Bit),
    ColumnDefinition::new("DRAW_CURVED_IF_VERTICAL", ColumnType::Bit),
    ColumnDefinition::new("AUTOMATIC_CURVED_LI_SETTINGS", ColumnType::Bit),
    ColumnDefinition::new("DRAW_CURVED_LINK_TO_LEFT", ColumnType::Bit),
    ColumnDefinition::new("LOCAL_LINK", ColumnType::Bit),
    ColumnDefinition::new("DRIVING", ColumnType::Bit),
    ColumnDefinition::new("ALT_ID", ColumnType::Integer),
    ColumnDefinition::new("LAST_EDITED_DATE", ColumnType::Timestamp),
    ColumnDefinition::new("LAST_EDITED_BY", ColumnType::Integer),
];

const CONSUMABLE_RESOURCE_COLUMNS: &[ColumnDefinition] = &[
    ColumnDefinition::new("ID", ColumnType::Integer),
    ColumnDefinition::new("COST_PER_UNITCURRENCZ", ColumnType::Integer),
    ColumnDefinition::new("COST_PER_UNITAMOUNT", ColumnType::Double),
    ColumnDefinition::new("INCOME_PER_UNITCURRENCZ", ColumnType::Integer),
    ColumnDefinition::new("INCOME_PER_UNITAMOUNT", ColumnType::Double),
    ColumnDefinition::new("COST_PER_USEDEFAULTSCURRENCZ", ColumnType::Integer),
    ColumnDefinition::new("COST_PER_USEDEFAULTSAMOUNT", ColumnType::Double),
    ColumnDefinition::new("INCOME_P_USEDEFAULTSCURRENCZ", ColumnType::Integer),
    ColumnDefinition::new("INCOME_P_USEDEFAULTSAMOUNT", ColumnType::Double),
    ColumnDefinition::new("DURATIOPDEFAULTSTYPF", ColumnType::Integer),
    ColumnDefinition::new("DURATIOPDEFAULTSELA_MONTHS", ColumnType::Integer),
    ColumnDefinition::new("DURATIOPDEFAULTSHOURS", ColumnType::Double),
    ColumnDefinition::new("DELAZDEFAULTSTYPF", ColumnType::Integer),
    ColumnDefinition::new("DELAZDEFAULTSELA_MONTHS", ColumnType::Integer),
    ColumnDefinition::new("DELAZDEFAULTSHOURS", ColumnType::Double),
    ColumnDefinition::new("DEFAULTSQUANTITY", ColumnType::Double),
    ColumnDefinition::new("DEFAULTSACTIVITY_CONV_FACTOR", ColumnType::Double),
    ColumnDefinition::new("DEFAULTSCONSUMPTION_RATE", ColumnType::Double),
    ColumnDefinition::new("DEFAULTSCONSUMPTION_RAT_UNIT", ColumnType::Integer),
    ColumnDefinition::new("DEFAULTSDURATION_TIMG_UNIT", ColumnType::Integer),
    ColumnDefinition::new("DEFAULTSDELAY_TIMF_UNIT", ColumnType::Integer),
    ColumnDefinition::new("DEFAULTSEXPENDITURE_C_CENTRE", ColumnType::Integer),
    ColumnDefinition::new("DEFAULTSINCOME_COST_CENTRE", ColumnType::Integer),
    ColumnDefinition::new("DEFAULTSTYPM", ColumnType::Integer),
    ColumnDefinition::new("DEFAULTSCALCULATEE_PARAMETER", ColumnType::Integer),
    ColumnDefinition::new("DEFAULTSBALANCINH_PARAMETER", ColumnType::Integer),
    ColumnDefinition::new("DEFAULTSCONSUMPTION_RAT_TYPE", ColumnType::Integer),
    ColumnDefinition::new("DEFAULTSUSE_TASL_CALENDAR", ColumnType::Bit),
    ColumnDefinition::new("DEFAULTSALLOD_PROPORTIONALLY", ColumnType::Bit),
    ColumnDefinition::new("DEFAULTSCONSUMED", ColumnType::Bit),
    ColumnDefinition::new("DEFAULTSACCOUNTEDA_ELSEWHERE", ColumnType::Bit),
    ColumnDefinition::new("DEFAULTSMAY_BE_SHORTERA_TASK", ColumnType::Bit),
    ColumnDefinition::new("AVAILABLE_FROM", ColumnType::Timestamp),
    ColumnDefinition::new("AVAILABLE_TO", ColumnType::Timestamp),
    ColumnDefinition::new("MEASUREMENT", ColumnType::Varchar),
    ColumnDefinition::new("CONSUMABLE_RESOURCE", ColumnType::Integer),
    ColumnDefinition::new("ARR_STOUT_STRES_APARROW_TYPE", ColumnType::Integer),
    ColumnDefinition::new("ARR_STOUT_STRES_APLENGTH", ColumnType::Integer),
    ColumnDefinition::new("ARR_STOUT_STRES_APEDGE", ColumnType::Integer),
    ColumnDefinition::new("ARR_STOUT_STRES_APBORDET_COL", ColumnType::Integer),
    ColumnDefinition::new("ARR_STOUT_STRES_APINSIDG_COL", ColumnType::Integer),
    ColumnDefinition::new("ARR_STOUT_STRES_APPLACEMENW", ColumnType::Integer),
    ColumnDefinition::new("BLI_STOUT_STRES_APBLIP_TYPE", ColumnType::Integer),
    ColumnDefinition::new("BLI_STOUT_STRES_APSCALEY", ColumnType::Integer),
    ColumnDefinition::new("BLI_STOUT_STRES_APSCALEZ", ColumnType::Integer),
    ColumnDefinition::new("BLI_STOUT_STRES_APGAP", ColumnType::Integer),
    ColumnDefinition::new("BLI_STOUT_STRES_APBORDES_COL", ColumnType::Integer),
    ColumnDefinition::new("BLI_STOUT_STRES_APINSIDF_COL", ColumnType::Integer),
    ColumnDefinition::new("BLI_STOUT_STRES_APPLACEMENV", ColumnType::Integer),
    ColumnDefinition::new("LIN_STOUT_STRES_APSCALEX", ColumnType::Double),
    ColumnDefinition::new("LIN_STOUT_STRES_APWIDTH", ColumnType::Integer),
    ColumnDefinition::new("LIN_STOUT_STRES_APBORDER_COL", ColumnType::Integer),
    ColumnDefinition::new("LIN_STOUT_STRES_APINSIDE_COL", ColumnType::Integer),
    ColumnDefinition::new("LIN_STOUT_STRES_APLINE_TYPE", ColumnType::Integer),
    ColumnDefinition::new("RES_APFOREGROUND_FILL_COLOUR", ColumnType::Integer),
    ColumnDefinition::new("RES_APBACKGROUND_FILL_COLOUR", ColumnType::Integer),
    ColumnDefinition::new("RES_APPATTERN", ColumnType::Integer),
    ColumnDefinition::new("AVAILABILITY", ColumnType::Double),
    ColumnDefinition::new("TOTAL_AVAILABILITY", ColumnType::Double),
    ColumnDefinition::new("SPAWE_INTEGER", ColumnType::Integer),
    ColumnDefinition::new("NAME", ColumnType::Varchar),
    ColumnDefinition::new("SHORT_NAME_SINGLE", ColumnType::Varchar),
    ColumnDefinition::new("SHORT_NAME_PLURAL", ColumnType::Varchar),
    ColumnDefinition::new("CALENDAR", ColumnType::Integer),
    ColumnDefinition::new("USE_PARENV_CALENDAR", ColumnType::Bit),
    ColumnDefinition::new("USE_LINE_STYLE_P_ALLOCATIONS", ColumnType::Bit),
    ColumnDefinition::new("CREATED_AS_FOLDER", ColumnType::Bit),
    ColumnDefinition::new("ALT_ID", ColumnType::Integer),
    ColumnDefinition::new("LAST_EDITED_DATE", ColumnType::Timestamp),
    ColumnDefinition::new("LAST_EDITED_BY", ColumnType::Integer),
    ColumnDefinition::new("NO_NEW_ASSIGNMENTS", ColumnType::Integer),
];

const PERMANENT_RESOURCE_COLUMNS: &[ColumnDefinition] = &[
    ColumnDefinition::new("ID", ColumnType::Integer),
    ColumnDefinition::new("EMAIL_ADDRESS", ColumnType::Varchar),
    ColumnDefinition::new("EFFORT_TIME_UNIT", ColumnType::Integer),
    ColumnDefinition::new("PURE_TREE", ColumnType::Bit),
    ColumnDefinition::new("EXCLUDED_FROM_TIMESHEET", ColumnType::Bit),
    ColumnDefinition::new("ARR_STOUT_STRES_APARROW_TYPE", ColumnType::Integer),
    ColumnDefinition::new("ARR_STOUT_STRES_APLENGTH", ColumnType::Integer),
    ColumnDefinition::new("ARR_STOUT_STRES_APEDGE", ColumnType::Integer),
    ColumnDefinition::new("ARR_STOUT_STRES_APBORDET_COL", ColumnType::Integer),
    ColumnDefinition::new("ARR_STOUT_STRES_APINSIDG_COL", ColumnType::Integer),
    ColumnDefinition::new("ARR_STOUT_STRES_APPLACEMENW", ColumnType::Integer),
    ColumnDefinition::new("BLI_STOUT_STRES_APBLIP_TYPE", ColumnType::Integer),
    ColumnDefinition::new("BLI_STOUT_STRES_APSCALEY", ColumnType::Integer),
    ColumnDefinition::new("BLI_STOUT_STRES_APSCALEZ", ColumnType::Integer),
    ColumnDefinition::new("BLI_STOUT_STRES_APGAP", ColumnType::Integer),
    ColumnDefinition::new("BLI_STOUT_STRES_APBORDES_COL", ColumnType::Integer),
    ColumnDefinition::new("BLI_STOUT_STRES_APINSIDF_COL", ColumnType::Integer),
    ColumnDefinition::new("BLI_STOUT_STRES_APPLACEMENV", ColumnType::Integer),
    ColumnDefinition::new("LIN_STOUT_STRES_APSCALEX", ColumnType::Double),
    ColumnDefinition::new("LIN_STOUT_STRES_APWIDTH", ColumnType::Integer),
    ColumnDefinition::new("LIN_STOUT_STRES_APBORDER_COL", ColumnType::Integer),
    ColumnDefinition::new("LIN_STOUT_STRES_APINSIDE_COL", ColumnType::Integer),
    ColumnDefinition::new("LIN_STOUT_STRES_APLINE_TYPE", ColumnType::Integer),
    ColumnDefinition::new("RES_APFOREGROUND_FILL_COLOUR", ColumnType::Integer),
    ColumnDefinition::new("RES_APBACKGROUND_FILL_COLOUR", ColumnType::Integer),
    ColumnDefinition::new("RES_APPATTERN", ColumnType::Integer),
    ColumnDefinition::new("AVAILABILITY", ColumnType::Double),
    ColumnDefinition::new("TOTAL_AVAILABILITY", ColumnType::Double),
    ColumnDefinition::new("SPAWE_INTEGER", ColumnType::Integer),
    ColumnDefinition::new("NAME", ColumnType::Varchar),
    ColumnDefinition::new("SHORT_NAME_SINGLE", ColumnType::Varchar),
    ColumnDefinition::new("SHORT_NAME_PLURAL", ColumnType::Varchar),
    ColumnDefinition::new("CALENDAR", ColumnType::Integer),
    ColumnDefinition::new("USE_PARENV_CALENDAR", ColumnType::Bit),
    ColumnDefinition::new("USE_LINE_STYLE_P_ALLOCATIONS", ColumnType::Bit),
    ColumnDefinition::new("CREATED_AS_FOLDER", ColumnType::Bit),
    ColumnDefinition::new("ALT_ID", ColumnType::Integer),
    ColumnDefinition::new("LAST_EDITED_DATE", ColumnType::Timestamp),
    ColumnDefinition::new("LAST_EDITED_BY", ColumnType::Integer),
    ColumnDefinition::new("NO_NEW_ASSIGNMENTS", ColumnType::Integer),
];

const PERMANENT_RESOURCE_SKILL_COLUMNS: &[ColumnDefinition] = &[
    ColumnDefinition::new("ID", ColumnType::Integer),
    ColumnDefinition::new("ARR_STOUT_STSKI_APARROW_TYPE", ColumnType::Integer),
    ColumnDefinition::new("ARR_STOUT_STSKI_APLENGTH", ColumnType::Integer),
    ColumnDefinition::new("ARR_STOUT_STSKI_APEDGE", ColumnType::Integer),
    ColumnDefinition::new("ARR_STOUT_STSKI_APBORDET_COL", ColumnType::Integer),
    ColumnDefinition::new("ARR_STOUT_STSKI_APINSIDG_COL", ColumnType::Integer),
    ColumnDefinition::new("ARR_STOUT_STSKI_APPLACEMENW", ColumnType::Integer),
    ColumnDefinition::new("BLI_STOUT_STSKI_APBLIP_TYPE", ColumnType::Integer),
    ColumnDefinition::new("BLI_STOUT_STSKI_APSCALEY", ColumnType::Integer),
    ColumnDefinition::new("BLI_STOUT_STSKI_APSCALEZ", ColumnType::Integer),
    ColumnDefinition::new("BLI_STOUT_STSKI_APGAP", ColumnType::Integer),
    ColumnDefinition::new("BLI_STOUT_STSKI_APBORDES_COL", ColumnType::Integer),
    ColumnDefinition::new("BLI_STOUT_STSKI_APINSIDF_COL", ColumnType::Integer),
    ColumnDefinition::new("BLI_STOUT_STSKI_APPLACEMENV", ColumnType::Integer),
    ColumnDefinition::new("LIN_STOUT_STSKI_APSCALEX", ColumnType::Double),
    ColumnDefinition::new("LIN_STOUT_STSKI_APWIDTH", ColumnType::Integer),
    ColumnDefinition::new("LIN_STOUT_STSKI_APBORDER_COL", ColumnType::Integer),
    ColumnDefinition::new("LIN_STOUT_STSKI_APINSIDE_COL", ColumnType::Integer),
    ColumnDefinition::new("LIN_STOUT_STSKI_APLINE_TYPE", ColumnType::Integer),
    ColumnDefinition::new("SKI_APFOREGROUND_FILL_COLOUR", ColumnType::Integer),
    ColumnDefinition::new("SKI_APBACKGROUND_FILL_COLOUR", ColumnType::Integer),
    ColumnDefinition::new("SKI_APPATTERN", ColumnType::Integer),
    ColumnDefinition::new("DURATIOODEFAULTTTYPF", ColumnType::Integer),
    ColumnDefinition::new("DURATIOODEFAULTTELA_MONTHS", ColumnType::Integer),
    ColumnDefinition::new("DURATIOODEFAULTTHOURS", ColumnType::Double),
    ColumnDefinition::new("DELAYDEFAULTTTYPF", ColumnType::Integer),
    ColumnDefinition::new("DELAYDEFAULTTELA_MONTHS", ColumnType::Integer),
    ColumnDefinition::new("DELAYDEFAULTTHOURS", ColumnType::Double),
    ColumnDefinition::new("DEFAULTTALLOCATION", ColumnType::Double),
    ColumnDefinition::new("DEFAULTTWORK_FROM_ACT_FACTOR", ColumnType::Double),
    ColumnDefinition::new("DEFAULTTEFFORT", ColumnType::Double),
    ColumnDefinition::new("DEFAULTTWORL", ColumnType::Double),
    ColumnDefinition::new("DEFAULTTWORK_RATE", ColumnType::Double),
    ColumnDefinition::new("DEFAULTTWORK_UNIT", ColumnType::Integer),
    ColumnDefinition::new("DEFAULTTWORK_RATE_TIME_UNIT", ColumnType::Integer),
    ColumnDefinition::new("DEFAULTTEFFORT_TIMG_UNIT", ColumnType::Integer),
    ColumnDefinition::new("DEFAULTTDURATION_TIMF_UNIT", ColumnType::Integer),
    ColumnDefinition::new("DEFAULTTDELAY_TIME_UNIT", ColumnType::Integer),
    ColumnDefinition::new("DEFAULTTTYPL", ColumnType::Integer),
    ColumnDefinition::new("DEFAULTTCALCULATED_PARAMETER", ColumnType::Integer),
    ColumnDefinition::new("DEFAULTTBALANCING_PARAMETER", ColumnType::Integer),
    ColumnDefinition::new("DEFAULTTWORK_RATE_TYPE", ColumnType::Integer),
    ColumnDefinition::new("DEFAULTTUSE_TASK_CALENDAR", ColumnType::Bit),
    ColumnDefinition::new("DEFAULTTALLOC_PROPORTIONALLY", ColumnType::Bit),
    ColumnDefinition::new("DEFAULTTCAN_BE_SPLIT", ColumnType::Bit),
    ColumnDefinition::new("DEFAULTTCAN_BE_DELAYED", ColumnType::Bit),
    ColumnDefinition::new("DEFAULTTCAN_BE_STRETCHED", ColumnType::Bit),
    ColumnDefinition::new("DEFAULTTACCOUNTED__ELSEWHERE", ColumnType::Bit),
    ColumnDefinition::new("DEFAULTTCONTRIBUTES_T_EFFORT", ColumnType::Bit),
    ColumnDefinition::new("DEFAULTTMAY_BE_SHORTER__TASK", ColumnType::Bit),
    ColumnDefinition::new("DEFAULTTSHARED_EFFORT", ColumnType::Bit),
    ColumnDefinition::new("ABILITY", ColumnType::Double),
    ColumnDefinition::new("EFFECTIVENESS", ColumnType::Double),
    ColumnDefinition::new("AVAILABILITY", ColumnType::Double),
    ColumnDefinition::new("AVAILABLF_FROM", ColumnType::Timestamp),
    ColumnDefinition::new("AVAILABLF_TO", ColumnType::Timestamp),
    ColumnDefinition::new("SPARO_INTEGER", ColumnType::Integer),
    ColumnDefinition::new("EFFORT_TIMF_UNIT", ColumnType::Integer),
    ColumnDefinition::new("ROLE", ColumnType::Integer),
    ColumnDefinition::new("PLAYER", ColumnType::Integer),
    ColumnDefinition::new("CREATED_AS_FOLDER", ColumnType::Bit),
    ColumnDefinition::new("ALT_ID", ColumnType::Integer),
    ColumnDefinition::new("LAST_EDITED_DATE", ColumnType::Timestamp),
    ColumnDefinition::new("LAST_EDITED_BY", ColumnType::Integer),
];

const PERMANENT_SCHEDULE_ALLOCATION_COLUMNS: &[ColumnDefinition] = &[
    ColumnDefinition::new("ID", ColumnType::Integer),
    ColumnDefinition::new("REQUIREE_BY", ColumnType::Integer),
    ColumnDefinition::new("OWNED_BY_TIMESHEET_X", ColumnType::Bit),
    ColumnDefinition::new("EFFORT", ColumnType::Double),
    ColumnDefinition::new("GIVEN_EFFORT", ColumnType::Double),
    ColumnDefinition::new("WORK_FROM_TASK_FACTOR", ColumnType::Double),
    ColumnDefinition::new("ALLOCATIOO", ColumnType::Double),
    ColumnDefinition::new("GIVEN_ALLOCATION", ColumnType::Double),
    ColumnDefinition::new("ALLOCATION_OF", ColumnType::Integer),
    ColumnDefinition::new("WORM_UNIT", ColumnType::Integer),
    ColumnDefinition::new("WORK_RATE_TIMF_UNIT", ColumnType::Integer),
    ColumnDefinition::new("EFFORT_TIMJ_UNIT", ColumnType::Integer),
    ColumnDefinition::new("WORO", ColumnType::Double),
    ColumnDefinition::new("GIVEN_WORK", ColumnType::Double),
    ColumnDefinition::new("WORL_RATE", ColumnType::Double),
    ColumnDefinition::new("GIVEN_WORK_RATE", ColumnType::Double),
    ColumnDefinition::new("TYPV", ColumnType::Integer),
    ColumnDefinition::new("CALCULATEG_PARAMETER", ColumnType::Integer),
    ColumnDefinition::new("BALANCINJ_PARAMETER", ColumnType::Integer),
    ColumnDefinition::new("SHAREE_EFFORT", ColumnType::Bit),
    ColumnDefinition::new("CONTRIBUTES_TO_ACTIVI_EFFORT", ColumnType::Bit),
    ColumnDefinition::new("DELAATYPF", ColumnType::Integer),
    ColumnDefinition::new("DELAAELA_MONTHS", ColumnType::Integer),
    ColumnDefinition::new("DELAY", ColumnType::Double),
    ColumnDefinition::new("GIVEO_DURATIONTYPF", ColumnType::Integer),
    ColumnDefinition::new("GIVEO_DURATIONELA_MONTHS", ColumnType::Integer),
    ColumnDefinition::new("GIVEO_DURATIONHOURS", ColumnType::Double),
    ColumnDefinition::new("DELAY_TIMI_UNIT", ColumnType::Integer),
    ColumnDefinition::new("RATE_TYPE", ColumnType::Integer),
    ColumnDefinition::new("USE_TASM_CALENDAR", ColumnType::Bit),
    ColumnDefinition::new("IGNORF", ColumnType::Bit),
    ColumnDefinition::new("ELAPSEE", ColumnType::Bit),
    ColumnDefinition::new("MAY_BE_SHORTER_THAN_TASK", ColumnType::Bit),
    ColumnDefinition::new("RESUMF", ColumnType::Timestamp),
    ColumnDefinition::new("SPAXE_INTEGER", ColumnType::Integer),
    ColumnDefinition::new("PERCENT_COMPLETE", ColumnType::Double),
    ColumnDefinition::new("USER_PERCENU_COMPLETE", ColumnType::Double),
    ColumnDefinition::new("ALLOCATIOR_GROUP", ColumnType::Integer),
    ColumnDefinition::new("ALLOCATED_TO", ColumnType::Integer),
    ColumnDefinition::new("PRIORITC", ColumnType::Integer),
    ColumnDefinition::new("ACCOUNTED_FOR_ELSEWHERE", ColumnType::Bit),
    ColumnDefinition::new("DURATIOTTYPF", ColumnType::Integer),
    ColumnDefinition::new("DURATIOTELA_MONTHS", ColumnType::Integer),
    ColumnDefinition::new("DURATIOTHOURS", ColumnType::Double),
    ColumnDefinition::new("LINKABLE_START", ColumnType::Timestamp),
    ColumnDefinition::new("LINKABLE_FINISH", ColumnType::Timestamp),
    ColumnDefinition::new("DURATION_TIME_UNIT", ColumnType::Integer),
    ColumnDefinition::new("UNSCHEDULABLG", ColumnType::Bit),
    ColumnDefinition::new("SUBPROJECT_ID", ColumnType::Integer),
    ColumnDefinition::new("ALT_ID", ColumnType::Integer),
    ColumnDefinition::new("LAST_EDITED_DATE", ColumnType::Timestamp),
    ColumnDefinition::new("LAST_EDITED_BY", ColumnType::Integer),
    ColumnDefinition::new("TIMESHEET_ROUND_UP_IF_UNDER", ColumnType::Integer),
    ColumnDefinition::new("TIMESHEET_CAP_IF_OVER", ColumnType::Integer),
    ColumnDefinition::new("BUDGETED_COST_CURRENCY", ColumnType::Integer),
    ColumnDefinition::new("BUDGETED_COST_AMOUNT", ColumnType::Double),
    ColumnDefinition::new("FLAGS", ColumnType::Integer),
    ColumnDefinition::new("ALLOCATION_PROFILE", ColumnType::Varchar),
    ColumnDefinition::new("RESOURCE_CURVE", ColumnType::Integer),
    ColumnDefinition::new("NONLINEAR_TYPE", ColumnType::Integer),
];

const WBS_ENTRY_COLUMNS: &[ColumnDefinition] = &[
    ColumnDefinition::new("WBS_ENTRYID", ColumnType::Integer),
    ColumnDefinition::new("NATURAP_ORDER", ColumnType::Integer),
    ColumnDefinition::new("WBT_CODE", ColumnType::Varchar),
    ColumnDefinition::new("WBT_NAME", ColumnType::Varchar),
    ColumnDefinition::new("WBS_ENTRY", ColumnType::Integer),
    ColumnDefinition::new("CREATED_AS_FOLDER", ColumnType::Bit),
    ColumnDefinition::new("ALT_ID", ColumnType::Integer),
    ColumnDefinition::new("LAST_EDITED_DATE", ColumnType::Timestamp),
    ColumnDefinition::new("LAST_EDITED_BY", ColumnType::Integer),
];

// 9006
const V9006_PROJECT_SUMMARY_COLUMNS_ORDER: &[&str] = &[
    "PROJECT_SUMMARYID",
    "DURATIONTYPF",
    "DURATIONELA_MONTHS",
    "DURATION",
    "PROJECT_START",
    "PROJECT_END",
    "FISCAL_YEAR_START",
    "DS_ID_BOOKED_FROM",
    "LAST_ID_USED_IN_BASELINE",
    "UNKNOWN",
    "WBN_CONSTRAINT",
    "WBN_RANGE_FROM",
    "WBN_RANGE_TO",
    "WBN_INCREMENT",
    "WBN_MINIMUM_WIDTH",
    "SPARF_INTEGER",
    "UTID_CONSTRAINT",
    "UTID_START_VALUE",
    "UTID_INCREMENT",
    "UTID_SUB_INCREMENT",
    "UTID_MINIMUM_WIDTH",
    "INITIAL_VIEW",
    "POINT_RELEASE",
    "TIMESHEET_PROJECT_ID",
    "LAST_ID_USED_IN_ARCHIVES",
    "BOOKOUT_SET_UNIQUE_ID",
    "NUMBER_BOOKED_OUT_SETS",
    "SHORT_NAME",
    "LONG_NAME",
    "LOCAL_FILE_BOOKED_FROM",
    "WBN_START_VALUE",
    "WBN_PATHNAME_SEPARATOR",
    "WBN_TASK_SEPARATOR",
    "WBN_PREFIX",
    "LAST_WBN_USED",
    "PROJECT_FOR",
    "PROJECT_BY",
    "PATH_SEPARATOR",
    "CHART_PATH_SEPARATOR",
    "UTID_PREFIX",
    "TIMESHEET_CONNECTION",
    "DURATION_TIME_UNIT",
    "SECURITY_CODELIBRARY",
    "BOOKOUT_COUNTER",
    "PROGRESS_METHOD",
    "WBN_ENABLED",
    "OLD_START_VALUE",
    "IGNORE_SATISFIED_COSTS",
    "UTID_ENABLE_SUB_INCREMENTS",
    "EXCLUSIVE_CUSTOM_TIME_UNITS",
    "LAST_EDITED_DATE",
    "LAST_EDITED_BY",
];

const V9006_BAR_COLUMNS_ORDER: &[&str] = &[
    "BARID",
    "BAR_START",
    "BAR_FINISH",
    "NATURAL_ORDER",
    "SPARI_INTEGER",
    "NAME",
    "EXPANDED_TASK",
    "PRIORITY",
    "UNSCHEDULABLE",
    "SUBPROJECT_ID",
    "ALT_ID",
    "LAST_EDITED_DATE",
    "LAST_EDITED_BY",
];

const V9006_CALENDAR_COLUMNS_ORDER: &[&str] = &[
    "ID",
    "SPARL_INTEGER",
    "NAME",
    "DOMINANT_WORK_PATTERN",
    "CALENDAR",
    "DISPLAY_THRESHOLD",
    "NO_WORKING_TIME_COLOUR",
    "WORKING_TIME_COLOUR",
    "NUMBERING",
    "SHOW_PAST_DATES",
    "CREATED_AS_FOLDER",
    "ALT_ID",
    "LAST_EDITED_DATE",
    "LAST_EDITED_BY",
];

const V9006_EXCEPTIONN_COLUMNS_ORDER: &[&str] = &[
    "ID",
    "ARR_STOUT_STAPPANDARROW_TYPE",
    "ARR_STOUT_STAPPANDLENGTH",
    "ARR_STOUT_STAPPANDEDGE",
    "ARR_STOUT_STAPPANDBORDET_COL",
    "ARR_STOUT_STAPPANDINSIDG_COL",
    "ARR_STOUT_STAPPANDPLACEMENW",
    "BLI_STOUT_STAPPANDBLIP_TYPE",
    "BLI_STOUT_STAPPANDSCALEY",
    "BLI_STOUT_STAPPANDSCALEZ",
    "BLI_STOUT_STAPPANDGAP",
    "BLI_STOUT_STAPPANDBORDES_COL",
    "BLI_STOUT_STAPPANDINSIDF_COL",
    "BLI_STOUT_STAPPANDPLACEMENV",
    "LIN_STOUT_STAPPANDSCALEX",
    "LIN_STOUT_STAPPANDWIDTH",
    "LIN_STOUT_STAPPANDBORDER_COL",
    "LIN_STOUT_STAPPANDINSIDE_COL",
    "LIN_STOUT_STAPPANDLINE_TYPE",
    "APPANDFOREGROUND_FILL_COLOUR",
    "APPANDBACKGROUND_FILL_COLOUR",
    "APPANDPATTERN",
    "UNIQUE_BIT_FIELD",
    "NAML",
    "TYPG",
    "ALT_ID",
    "LAST_EDITED_DATE",
    "LAST_EDITED_BY",
];

const V9006_EXCEPTION_ASSIGNMENT_COLUMNS_ORDER: &[&str] = &[
    "EXCEPTION_ASSIGNMENTID",
    "START_DATE",
    "END_DATE",
    "EXCEPTIOO",
];

const V9006_TIME_ENTRY_COLUMNS_ORDER: &[&str] = &[
    "TIME_ENTRYID",
    "EXCEPTION",
    "START_TIME",
    "END_TIME",
];

const V9006_WORK_PATTERN_COLUMNS_ORDER: &[&str] = &[
    "ID",
    "DEFAULT_OFFSET",
    "NAME",
    "DEFAULT_ALIGNMENT_DATE",
    "CREATED_AS_FOLDER",
    "ALT_ID",
    "LAST_EDITED_DATE",
    "LAST_EDITED_BY",
];

const V9006_TASK_COLUMNS_ORDER: &[&str] = &[
    "TASKID",
    "GIVEN_DURATIONTYPF",
    "GIVEN_DURATIONELA_MONTHS",
    "GIVEN_DURATION",
    "RESUME",
    "GIVEN_START",
    "LATEST_PROGRESS_PERIOD",
    "TASK_WORK_RATE",
    "PLACEMENT",
    "BEEN_SPLIT",
    "UNKNOWN1",
    "UNKNOWN2",
    "UNKNOWN3",
    "UNKNOWN4",
    "UNKNOWN5",
    "UNKNOWN6",
    "UNKNOWN7",
    "UNKNOWN8",
    "UNKNOWN9",
    "EARLY_START_DATE",
    "LATE_START_DATE",
    "FREE_START_DATE",
    "START_CONSTRAINT_DATE",
    "END_CONSTRAINT_DATE",
    "EFFORT_BUDGET",
    "USER_PERCENT_COMPLETE",
    "SPAVE_INTEGER",
    "SWIM_LANE",
    "NATURAL_ORDER",
    "LOGICAL_PRECEDENCE",
    "UNKNOWN",
    "UNKNOWN",
    "UNKNOWN",
    "UNKNOWN",
    "UNKNOWN",
    "OVERALL_PERCENT_COMPL_WEIGHT",
    "NAME",
    "WBN_CODE",
    "NOTES",
    "UNIQUE_TASK_ID",
    "CALENDAR",
    "EFFORT_TIMI_UNIT",
    "WORL_UNIT",
    "LATEST_ALLOC_PROGRESS_PERIOD",
    "WORN",
    "UNKNOWN",
    "BAR",
    "CONSTRAINT_FLAG",
    "PRIORITB",
    "MARK_FOS_HIDING",
    "LONGEST_PATH",
    "START_ON_NEX_DAY",
    "OWNED_BY_TIMESHEEV_X",
    "DURATIOTTYPF",
    "DURATIOTELA_MONTHS",
    "DURATIOTHOURS",
    "LINKABLE_START",
    "LINKABLE_FINISH",
    "DURATION_TIME_UNIT",
    "UNSCHEDULABLG",
    "SUBPROJECT_ID",
    "ALT_ID",
    "LAST_EDITED_DATE",
    "LAST_EDITED_BY",
];

const V9006_MILESTONE_COLUMNS_ORDER: &[&str] = &[
    "MILESTONEID",
    "GIVEN_DATE_TIME",
    "PROGREST_PERIOD",
    "SYMBOL_APPEARANCE",
    "MILESTONE_TYPE",
    "PLACEMENU",
    "COMPLETED",
    "UNKNOWN",
    "UNKNOWN",
    "UNKNOWN",
    "UNKNOWN",
    "UNKNOWN",
    "UNKNOWN",
    "UNKNOWN",
    "UNKNOWN",
    "UNKNOWN",
    "EARLY_START_DATE",
    "LATE_START_DATE",
    "FREE_START_DATE",
    "START_CONSTRAINT_DATE",
    "END_CONSTRAINT_DATE",
    "EFFORT_BUDGET",
    "NATURAL_ORDER",
    "LOGICAL_PRECEDENCE",
    "SPAVE_INTEGER",
    "SWIM_LANE",
    "USER_PERCENT_COMPLETE",
    "UNKNOWN",
    "UNKNOWN",
    "UNKNOWN",
    "UNKNOWN",
    "UNKNOWN",
    "OVERALL_PERCENT_COMPL_WEIGHT",
    "NAME",
    "WBN_CODE",
    "NOTES",
    "UNIQUE_TASK_ID",
    "CALENDAR",
    "EFFORT_TIMI_UNIT",
    "WORL_UNIT",
    "LATEST_ALLOC_PROGRESS_PERIOD",
    "WORN",
    "UNKNOWN",
    "BAR",
    "CONSTRAINT_FLAG",
    "PRIORITB",
    "UNKNOWN",
    "CRITICAM",
    "USE_PARENU_CALENDAR",
    "BUFFER_TASK",
    "MARK_FOS_HIDING",
    "OWNED_BY_TIMESHEEV_X",
    "UNKNOWN",
    "LINKABLE_START",
    "LINKABLE_FINISH",
    "DURATION_TIME_UNIT",
    "UNSCHEDULABLG",
    "SUBPROJECT_ID",
    "ALT_ID",
    "LAST_EDITED_DATE",
    "LAST_EDITED_BY",
];

const V9006_EXPANDED_TASK_COLUMNS_ORDER: &[&str] = &[
    "EXPANDED_TASKID",
    "COMM_ATTSSCALE1",
    "COMM_ATTSSCALE2",
    "COMM_ATTSSCALE3",
    "UNKNOWN",
    "UNKNOWN",
    "UNKNOWN",
    "UNKNOWN",
    "PERCENTAGE_LIKELIHOOD",
    "PROJ_RISK",
    "PROJ_PRIORITY",
    "ISSUE_DATE",
    "REVISION_DATE",
    "DRAWN_BY",
    "REVISION_COMMENT",
    "CHART_MANAGER",
    "REVISION_NUMBER",
    "PROGRAMME_NUMBER",
    "COMMENU",
    "PROJ_TYPE",
    "PROJ_STATUS",
    "UNKNOWN",
    "PROGRESU_PERIOD",
    "TYPH",
    "UNKNOWN",
    "UNKNOWN",
    "MANAGER_RESOURCE",
    "CUMULATIVH_COSTCURRENCZ",
    "CUMULATIVH_COSTAMOUNT",
    "CUMULATIVH_INCOMECURRENCZ",
    "CUMULATIVH_INCOMEAMOUNT",
    "CUMULATIVE_ACTU_COSTCURRENCZ",
    "CUMULATIVE_ACTU_COSTAMOUNT",
    "CUMULATIV_DURATIONTYPF",
    "CUMULATIV_DURATIONELA_MONTHS",
    "CUMULATIV_DURATIONHOURS",
    "ACTUAL_CU_DURATIONTYPF",
    "ACTUAL_CU_DURATIONELA_MONTHS",
    "ACTUAL_CU_DURATIONHOURS",
    "ACTUAL_CUMULATIVE_QUANTITY",
    "CUMULATIVE_QUANTIT_REMAINING",
    "CUMULATIVE_EFFORT_P_COMPLETE",
    "CUMULATIVE_WORK_PER_COMPLETE",
    "CUMULATIVE_QUANTITY_COMPLETE",
    "MILESTONE_PERCENT_COMPLETE",
    "FIRST_PREFERRED_START",
    "CALCULATED_PROGRESS_DATE",
    "LATEST_PROGRESS_DATE",
    "EARLIEST_PROGRESS_DATE",
    "EARLY_END_DATE_RT",
    "LATE_END_DATE_RT",
    "FREE_END_DATE_RT",
    "CUMULATIVE_DEMANE_EFFORT",
    "CUMULATIVE_SCHEDULEE_EFFORT",
    "ACTUAL_CUMULATIVF_EFFORT",
    "CUMULATIVE_EFFORU_REMAINING",
    "ACTUAL_CUMULATIVE_WORK",
    "CUMULATIVE_WORK_REMAINING",
    "MILESTONES_DONE",
    "MILESTONES_REMAINING",
    "CUMULATIVE_EFFORT_TIME_UNIT",
    "CUMULATIVE_LATEST_PRO_PERIOD",
    "UNKNOWN",
    "UNKNOWN",
    "UNKNOWN",
    "UNKNOWN",
    "UNKNOWN",
    "UNKNOWN",
    "ACTUAL_DURATIONTYPF",
    "ACTUAL_DURATIONELA_MONTHS",
    "ACTUAL_DURATION",
    "EARLY_START_DATE",
    "LATE_START_DATE",
    "FREE_START_DATE",
    "START_CONSTRAINT_DATE",
    "END_CONSTRAINT_DATE",
    "EFFORT_BUDGET",
    "NATURAL_ORDER",
    "UNKNOWN",
    "UNKNOWN",
    "UNKNOWN",
    "LOGICAL_PRECEDENCE",
    "UNKNOWN",
    "UNKNOWN",
    "SPAVE_INTEGER",
    "SWIM_LANE",
    "USER_PERCENT_COMPLETE",
    "OVERALL_PERCENT_COMPL_WEIGHT",
    "NAME",
    "WBN_CODE",
    "NOTES",
    "UNIQUE_TASK_ID",
    "CALENDAR",
    "EFFORT_TIMI_UNIT",
    "WORL_UNIT",
    "LATEST_ALLOC_PROGRESS_PERIOD",
    "WORN",
    "UNKNOWN",
    "BAR",
    "CONSTRAINT_FLAG",
    "PRIORITB",
    "USE_PARENU_CALENDAR",
    "CRITICAM",
    "BUFFER_TASK",
    "MARK_FOS_HIDING",
    "OWNED_BY_TIMESHEEV_X",
    "START_ON_NEX_DAY",
    "DURATIOTHOURS",
    "LINKABLE_START",
    "LINKABLE_FINISH",
    "DURATION_TIME_UNIT",
    "UNSCHEDULABLG",
    "SUBPROJECT_ID",
    "ALT_ID",
    "LAST_EDITED_DATE",
    "LAST_EDITED_BY",
];

const V9006_LINK_COLUMNS_ORDER: &[&str] = &[
    "ID",
    "START_LAG_TIMETYPF",
    "START_LAG_TIMEELA_MONTHS",
    "START_LAG_TIME",
    "END_LAG_TIMETYPF",
    "END_LAG_TIMEELA_MONTHS",
    "END_LAG_TIME",
    "MAXIMUM_LAGTYPF",
    "MAXIMUM_LAGELA_MONTHS",
    "MAXIMUM_LAGHOURS",
    "STARV_DATE",
    "ENF_DATE",
    "CURVATURE_PERCENTAGE",
    "COMMENTS",
    "LINK_CATEGORY",
    "START_LAG_TIME_UNIT",
    "END_LAG_TIME_UNIT",
    "MAXIMUM_LAG_TIME_UNIT",
    "START_TASK",
    "END_TASK",
    "START_LAG_PERCENT_FLOAT",
    "START_LAG_TYPE",
    "LINK_KIND",
    "MAINTAIN_TASK_OFFSETS",
    "END_LAG_TYPE",
    "UNSCHEDULABLF",
    "CRITICAL",
    "ON_LOOP",
    "MAXIMUM_LAG_MODE",
    "ANNOTATE_LEAD_LAG",
    "START_REPOSITION_ON_TAS_MOVE",
    "END_REPOSITION_ON_TASK_MOVE",
    "DRAW_CURVED_IF_VERTICAL",
    "AUTOMATIC_CURVED_LI_SETTINGS",
    "DRAW_CURVED_LINK_TO_LEFT",
    "LOCAL_LINK",
    "DRIVING",
    "ALT_ID",
    "LAST_EDITED_DATE",
    "LAST_EDITED_BY",
];

const V9006_CONSUMABLE_RESOURCE_COLUMNS_ORDER: &[&str] = &[
    "ID",
    "UNKNOWN",
    "UNKNOWN",
    "UNKNOWN",
    "UNKNOWN",
    "UNKNOWN",
    "UNKNOWN",
    "UNKNOWN",
    "UNKNOWN",
    "COST_PER_UNITCURRENCZ",
    "COST_PER_UNITAMOUNT",
    "INCOME_PER_UNITCURRENCZ",
    "INCOME_PER_UNITAMOUNT",
    "COST_PER_USEDEFAULTSCURRENCZ",
    "COST_PER_USEDEFAULTSAMOUNT",
    "INCOME_P_USEDEFAULTSCURRENCZ",
    "INCOME_P_USEDEFAULTSAMOUNT",
    "DURATIOPDEFAULTSTYPF",
    "DURATIOPDEFAULTSELA_MONTHS",
    "DURATIOPDEFAULTSHOURS",
    "DELAZDEFAULTSTYPF",
    "DELAZDEFAULTSELA_MONTHS",
    "DELAZDEFAULTSHOURS",
    "DEFAULTSQUANTITY",
    "DEFAULTSACTIVITY_CONV_FACTOR",
    "DEFAULTSCONSUMPTION_RATE",
    "DEFAULTSCONSUMPTION_RAT_UNIT",
    "DEFAULTSDURATION_TIMG_UNIT",
    "DEFAULTSDELAY_TIMF_UNIT",
    "DEFAULTSEXPENDITURE_C_CENTRE",
    "DEFAULTSINCOME_COST_CENTRE",
    "DEFAULTSTYPM",
    "DEFAULTSCALCULATEE_PARAMETER",
    "DEFAULTSBALANCINH_PARAMETER",
    "DEFAULTSCONSUMPTION_RAT_TYPE",
    "DEFAULTSUSE_TASL_CALENDAR",
    "DEFAULTSALLOD_PROPORTIONALLY",
    "DEFAULTSCONSUMED",
    "DEFAULTSACCOUNTEDA_ELSEWHERE",
    "DEFAULTSMAY_BE_SHORTERA_TASK",
    "AVAILABLE_FROM",
    "AVAILABLE_TO",
    "UNKNOWN",
    "UNKNOWN",
    "UNKNOWN",
    "UNKNOWN",
    "MEASUREMENT",
    "CONSUMABLE_RESOURCE",
    "ARR_STOUT_STRES_APARROW_TYPE",
    "ARR_STOUT_STRES_APLENGTH",
    "ARR_STOUT_STRES_APEDGE",
    "ARR_STOUT_STRES_APBORDET_COL",
    "ARR_STOUT_STRES_APINSIDG_COL",
    "ARR_STOUT_STRES_APPLACEMENW",
    "BLI_STOUT_STRES_APBLIP_TYPE",
    "BLI_STOUT_STRES_APSCALEY",
    "BLI_STOUT_STRES_APSCALEZ",
    "BLI_STOUT_STRES_APGAP",
    "BLI_STOUT_STRES_APBORDES_COL",
    "BLI_STOUT_STRES_APINSIDF_COL",
    "BLI_STOUT_STRES_APPLACEMENV",
    "LIN_STOUT_STRES_APSCALEX",
    "LIN_STOUT_STRES_APWIDTH",
    "LIN_STOUT_STRES_APBORDER_COL",
    "LIN_STOUT_STRES_APINSIDE_COL",
    "LIN_STOUT_STRES_APLINE_TYPE",
    "RES_APFOREGROUND_FILL_COLOUR",
    "RES_APBACKGROUND_FILL_COLOUR",
    "RES_APPATTERN",
    "AVAILABILITY",
    "TOTAL_AVAILABILITY",
    "SPAWE_INTEGER",
    "NAME",
    "SHORT_NAME_SINGLE",
    "SHORT_NAME_PLURAL",
    "CALENDAR",
    "USE_PARENV_CALENDAR",
    "USE_LINE_STYLE_P_ALLOCATIONS",
    "CREATED_AS_FOLDER",
    "ALT_ID",
    "LAST_EDITED_DATE",
    "LAST_EDITED_BY",
];

const V9006_PERMANENT_RESOURCE_COLUMNS_ORDER: &[&str] = &[
    "ID",
    "UNKNOWN",
    "UNKNOWN",
    "UNKNOWN",
    "UNKNOWN",
    "UNKNOWN",
    "UNKNOWN",
    "UNKNOWN",
    "UNKNOWN",
    "UNKNOWN",
    "UNKNOWN",
    "UNKNOWN",
    "UNKNOWN",
    "UNKNOWN",
    "UNKNOWN",
    "UNKNOWN",
    "UNKNOWN",
    "UNKNOWN",
    "EFFORT_TIME_UNIT",
    "PURE_TREE",
    "ARR_STOUT_STRES_APARROW_TYPE",
    "ARR_STOUT_STRES_APLENGTH",
    "ARR_STOUT_STRES_APEDGE",
    "ARR_STOUT_STRES_APBORDET_COL",
    "ARR_STOUT_STRES_APINSIDG_COL",
    "ARR_STOUT_STRES_APPLACEMENW",
    "BLI_STOUT_STRES_APBLIP_TYPE",
    "BLI_STOUT_STRES_APSCALEY",
    "BLI_STOUT_STRES_APSCALEZ",
    "BLI_STOUT_STRES_APGAP",
    "BLI_STOUT_STRES_APBORDES_COL",
    "BLI_STOUT_STRES_APINSIDF_COL",
    "BLI_STOUT_STRES_APPLACEMENV",
    "LIN_STOUT_STRES_APSCALEX",
    "LIN_STOUT_STRES_APWIDTH",
    "LIN_STOUT_STRES_APBORDER_COL",
    "LIN_STOUT_STRES_APINSIDE_COL",
    "LIN_STOUT_STRES_APLINE_TYPE",
    "RES_APFOREGROUND_FILL_COLOUR",
    "RES_APBACKGROUND_FILL_COLOUR",
    "RES_APPATTERN",
    "AVAILABILITY",
    "TOTAL_AVAILABILITY",
    "SPAWE_INTEGER",
    "NAME",
    "SHORT_NAME_SINGLE",
    "SHORT_NAME_PLURAL",
    "CALENDAR",
    "USE_PARENV_CALENDAR",
    "USE_LINE_STYLE_P_ALLOCATIONS",
    "ALT_ID",
    "UNKNOWN",
    "LAST_EDITED_DATE",
    "LAST_EDITED_BY",
];

const V9006_PERMANENT_RESOURCE_SKILL_COLUMNS_ORDER: &[&str] = &[
    "ID",
    "UNKNOWN",
    "UNKNOWN",
    "UNKNOWN",
    "UNKNOWN",
    "ARR_STOUT_STSKI_APARROW_TYPE",
    "ARR_STOUT_STSKI_APLENGTH",
    "ARR_STOUT_STSKI_APEDGE",
    "ARR_STOUT_STSKI_APBORDET_COL",
    "ARR_STOUT_STSKI_APINSIDG_COL",
    "ARR_STOUT_STSKI_APPLACEMENW",
    "BLI_STOUT_STSKI_APBLIP_TYPE",
    "BLI_STOUT_STSKI_APSCALEY",
    "BLI_STOUT_STSKI_APSCALEZ",
    "BLI_STOUT_STSKI_APGAP",
    "BLI_STOUT_STSKI_APBORDES_COL",
    "BLI_STOUT_STSKI_APINSIDF_COL",
    "BLI_STOUT_STSKI_APPLACEMENV",
    "LIN_STOUT_STSKI_APSCALEX",
    "LIN_STOUT_STSKI_APWIDTH",
    "LIN_STOUT_STSKI_APBORDER_COL",
    "LIN_STOUT_STSKI_APINSIDE_COL",
    "LIN_STOUT_STSKI_APLINE_TYPE",
    "SKI_APFOREGROUND_FILL_COLOUR",
    "SKI_APBACKGROUND_FILL_COLOUR",
    "SKI_APPATTERN",
    "DURATIOODEFAULTTTYPF",
    "DURATIOODEFAULTTELA_MONTHS",
    "DURATIOODEFAULTTHOURS",
    "DELAYDEFAULTTTYPF",
    "DELAYDEFAULTTELA_MONTHS",
    "DELAYDEFAULTTHOURS",
    "DEFAULTTALLOCATION",
    "DEFAULTTWORK_FROM_ACT_FACTOR",
    "DEFAULTTEFFORT",
    "DEFAULTTWORL",
    "DEFAULTTWORK_RATE",
    "DEFAULTTWORK_UNIT",
    "DEFAULTTWORK_RATE_TIME_UNIT",
    "DEFAULTTEFFORT_TIMG_UNIT",
    "DEFAULTTDURATION_TIMF_UNIT",
    "DEFAULTTDELAY_TIME_UNIT",
    "DEFAULTTTYPL",
    "DEFAULTTCALCULATED_PARAMETER",
    "DEFAULTTBALANCING_PARAMETER",
    "DEFAULTTWORK_RATE_TYPE",
    "DEFAULTTUSE_TASK_CALENDAR",
    "DEFAULTTALLOC_PROPORTIONALLY",
    "DEFAULTTCAN_BE_SPLIT",
    "DEFAULTTCAN_BE_DELAYED",
    "DEFAULTTCAN_BE_STRETCHED",
    "DEFAULTTACCOUNTED__ELSEWHERE",
    "DEFAULTTCONTRIBUTES_T_EFFORT",
    "DEFAULTTMAY_BE_SHORTER__TASK",
    "DEFAULTTSHARED_EFFORT",
    "ABILITY",
    "AVAILABLF_FROM",
    "AVAILABLF_TO",
    "UNKNOWN",
    "UNKNOWN",
    "UNKNOWN",
    "UNKNOWN",
    "UNKNOWN",
    "UNKNOWN",
    "SPARO_INTEGER",
    "EFFORT_TIMF_UNIT",
    "ROLE",
    "PLAYER",
    "CREATED_AS_FOLDER",
    "ALT_ID",
    "LAST_EDITED_DATE",
    "LAST_EDITED_BY",
];

const V9006_PERMANENT_SCHEDULE_ALLOCATION_COLUMNS_ORDER: &[&str] = &[
    "ID",
    "REQUIREE_BY",
    "EFFORT",
    "GIVEN_EFFORT",
    "UNKNOWN",
    "WORK_FROM_TASK_FACTOR",
    "ALLOCATIOO",
    "GIVEN_ALLOCATION",
    "ALLOCATION_OF",
    "WORM_UNIT",
    "WORK_RATE_TIMF_UNIT",
    "EFFORT_TIMJ_UNIT",
    "WORO",
    "GIVEN_WORK",
    "UNKNOWN",
    "WORL_RATE",
    "GIVEN_WORK_RATE",
    "TYPV",
    "CALCULATEG_PARAMETER",
    "BALANCINJ_PARAMETER",
    "SHAREE_EFFORT",
    "UNKNOWN",
    "UNKNOWN",
    "UNKNOWN",
    "CONTRIBUTES_TO_ACTIVI_EFFORT",
    "DELAATYPF",
    "DELAAELA_MONTHS",
    "DELAY",
    "GIVEO_DURATIONTYPF",
    "UNKNOWN",
    "GIVEO_DURATIONHOURS",
    "DELAY_TIMI_UNIT",
    "RATE_TYPE",
    "USE_TASM_CALENDAR",
    "IGNORF",
    "ELAPSEE",
    "MAY_BE_SHORTER_THAN_TASK",
    "UNKNOWN",
    "UNKNOWN",
    "UNKNOWN",
    "UNKNOWN",
    "RESUMF",
    "SPAXE_INTEGER",
    "PERCENT_COMPLETE",
    "USER_PERCENU_COMPLETE",
    "ALLOCATIOR_GROUP",
    "ALLOCATED_TO",
    "PRIORITC",
    "ACCOUNTED_FOR_ELSEWHERE",
    "DURATIOTTYPF",
    "DURATIOTELA_MONTHS",
    "DURATIOTHOURS",
    "LINKABLE_START",
    "LINKABLE_FINISH",
    "DURATION_TIMJ_UNIT",
    "UNSCHEDULABLG",
    "SUBPROJECT_ID",
    "ALT_ID",
    "LAST_EDITED_DATE",
    "LAST_EDITED_BY",
];

const V9006_WBS_ENTRY_COLUMNS_ORDER: &[&str] = &[
    "WBS_ENTRYID",
    "NATURAP_ORDER",
    "WBT_CODE",
    "WBT_NAME",
    "WBS_ENTRY",
    "CREATED_AS_FOLDER",
    "ALT_ID",
    "LAST_EDITED_DATE",
    "LAST_EDITED_BY",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_columns_leave_empty_slots() {
        let table = TableDefinition::new("LINK", LINK_COLUMNS, &["ID", "NOT_A_COLUMN", "START_TASK"]);
        assert_eq!(table.columns.len(), 3);
        assert!(table.columns[1].is_none());
        assert_eq!(table.columns[2].map(|c| c.name), Some("START_TASK"));
    }

    #[test]
    fn every_9006_table_has_a_catalog() {
        let format = FileFormat::v9006();
        for record_type in [2, 7, 11, 12, 14, 15, 17, 18, 21, 22, 23, 24, 25, 61, 62, 63, 67, 190] {
            let table = format.table(record_type).map(|t| t.name);
            assert!(table.and_then(catalog).is_some(), "record type {record_type}");
        }
    }
}
