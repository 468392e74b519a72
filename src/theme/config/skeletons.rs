/// Skeleton content written to a missing or empty `settings.conf`.
pub const SETTINGS_SKELETON_CONTENT: &str = "# fieldwright settings\n\
#\n\
# Format: key = value\n\
# Lines starting with #, // or ; are comments. Inline comments need a space before #.\n\
#\n\
# ---------- Submission ----------\n\
# Endpoint the field configuration is POSTed to as JSON\n\
submit_endpoint = https://www.mocky.io/v2/566061f21200008e3aabd919\n\
# Request timeout in seconds\n\
submit_timeout_secs = 10\n\
# Start in dry-run mode (payload is logged, nothing is sent)\n\
app_dry_run_default = false\n\
#\n\
# ---------- Choice rules ----------\n\
# Maximum number of choices that appear exactly once\n\
unique_choice_ceiling = 50\n\
# Maximum characters per choice (0 or off disables the rule)\n\
max_choice_chars = 40\n\
#\n\
# ---------- Autosave ----------\n\
# Snapshot the form to draft.json while editing\n\
autosave_enabled = true\n\
# Quiet period after the last edit before the draft is written\n\
autosave_debounce_ms = 500\n";
