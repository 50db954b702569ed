//! Diesel schema for message persistence.

diesel::table! {
    /// Board message rows.
    messages (id) {
        /// Store-assigned identifier.
        id -> Int4,
        /// Message text.
        body -> Text,
        /// Author name recorded at creation.
        #[max_length = 255]
        username -> Varchar,
        /// Insert timestamp, assigned by the database.
        created_at -> Timestamptz,
    }
}
