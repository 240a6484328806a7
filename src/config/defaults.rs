//! Default values for every setting
//!
//! Centralized location for the declarative tables handed to the web runtime.

// =============================================================================
// Environment variable names
// =============================================================================

pub const ENV_SECRET_KEY: &str = "SECRET_KEY";
pub const ENV_DEBUG: &str = "DEBUG";
pub const ENV_ALLOWED_HOSTS: &str = "ALLOWED_HOSTS";
pub const ENV_DATABASE_URL: &str = "DATABASE_URL";
pub const ENV_DB_NAME: &str = "DB_NAME";
pub const ENV_DB_USER: &str = "DB_USER";
pub const ENV_DB_PASSWORD: &str = "DB_PASSWORD";
pub const ENV_DB_HOST: &str = "DB_HOST";
pub const ENV_DB_PORT: &str = "DB_PORT";

/// The only `DEBUG` value that turns debug mode on
pub const DEBUG_TRUE_LITERAL: &str = "True";

// =============================================================================
// Hosts
// =============================================================================

/// Used when `ALLOWED_HOSTS` is unset or yields no entries
pub const DEFAULT_ALLOWED_HOSTS: &[&str] = &["localhost", "127.0.0.1"];

// =============================================================================
// Database
// =============================================================================

pub const DEFAULT_DB_HOST: &str = "localhost";
pub const DEFAULT_DB_PORT: u16 = 5432;

/// Persistent connection lifetime for URL-configured databases, in seconds
pub const URL_CONN_MAX_AGE_SECS: u64 = 600;

// =============================================================================
// Application modules
// =============================================================================

pub const INSTALLED_APPS: &[&str] = &[
    "django.contrib.admin",
    "django.contrib.auth",
    "django.contrib.contenttypes",
    "django.contrib.sessions",
    "django.contrib.messages",
    "django.contrib.staticfiles",
    // project apps
    "accounts",
    "withMe",
    "findMe",
    "community",
    "chatBot",
    "mypage",
    "manager",
    "etc",
];

/// Middleware in request order
pub const MIDDLEWARE: &[&str] = &[
    "django.middleware.security.SecurityMiddleware",
    "django.contrib.sessions.middleware.SessionMiddleware",
    "django.middleware.common.CommonMiddleware",
    "django.middleware.csrf.CsrfViewMiddleware",
    "django.contrib.auth.middleware.AuthenticationMiddleware",
    "django.contrib.messages.middleware.MessageMiddleware",
    "django.middleware.clickjacking.XFrameOptionsMiddleware",
];

pub const ROOT_URLCONF: &str = "config.urls";
pub const WSGI_APPLICATION: &str = "config.wsgi.application";

// =============================================================================
// Templates
// =============================================================================

pub const TEMPLATE_BACKEND: &str = "django.template.backends.django.DjangoTemplates";

pub const TEMPLATE_CONTEXT_PROCESSORS: &[&str] = &[
    "django.template.context_processors.request",
    "django.contrib.auth.context_processors.auth",
    "django.contrib.messages.context_processors.messages",
];

// =============================================================================
// Password validation
// =============================================================================

pub const PASSWORD_VALIDATORS: &[&str] = &[
    "django.contrib.auth.password_validation.UserAttributeSimilarityValidator",
    "django.contrib.auth.password_validation.MinimumLengthValidator",
    "django.contrib.auth.password_validation.CommonPasswordValidator",
    "django.contrib.auth.password_validation.NumericPasswordValidator",
];

// =============================================================================
// Internationalization & static files
// =============================================================================

pub const LANGUAGE_CODE: &str = "en-us";
pub const TIME_ZONE: &str = "UTC";
pub const USE_I18N: bool = true;
pub const USE_TZ: bool = true;

pub const STATIC_URL: &str = "static/";

pub const DEFAULT_AUTO_FIELD: &str = "django.db.models.BigAutoField";

/// Convert a static table into owned strings
pub fn to_owned_list(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}
