//! Diesel schema for follow-up task persistence.

diesel::table! {
    /// Follow-up task records.
    tasks (id) {
        /// Task identifier.
        id -> Uuid,
        /// Tenant owning the task, copied from the application at creation.
        tenant_id -> Uuid,
        /// Referenced application.
        application_id -> Uuid,
        /// Kind of follow-up action. The SQL column is named `type`.
        #[sql_name = "type"]
        #[max_length = 50]
        kind -> Varchar,
        /// Lifecycle status.
        #[max_length = 50]
        status -> Varchar,
        /// Due timestamp, normalized to UTC.
        due_at -> Timestamptz,
        /// Creation timestamp.
        created_at -> Timestamptz,
        /// Last mutation timestamp.
        updated_at -> Timestamptz,
    }
}

diesel::table! {
    /// Externally-owned application records; only the columns this crate
    /// reads for tenant resolution.
    applications (id) {
        /// Application identifier.
        id -> Uuid,
        /// Tenant owning the application.
        tenant_id -> Uuid,
    }
}
