//! Names of PHP's internal functions, as reported by a PHP 8 runtime with
//! the default extension set (core, standard, ctype, date, filter, hash,
//! json, mbstring, pcre, spl).
//!
//! Language constructs that look like calls (`isset`, `empty`, `array`,
//! `list`, `exit`, `eval`, ...) are not functions and are absent.

pub(crate) static PHP_INTERNAL_FUNCTIONS: &[&str] = &[
    // Core
    "zend_version",
    "func_num_args",
    "func_get_arg",
    "func_get_args",
    "strlen",
    "strcmp",
    "strncmp",
    "strcasecmp",
    "strncasecmp",
    "error_reporting",
    "define",
    "defined",
    "get_class",
    "get_called_class",
    "get_parent_class",
    "method_exists",
    "property_exists",
    "class_exists",
    "interface_exists",
    "trait_exists",
    "enum_exists",
    "function_exists",
    "class_alias",
    "get_included_files",
    "get_required_files",
    "is_subclass_of",
    "is_a",
    "get_class_vars",
    "get_object_vars",
    "get_mangled_object_vars",
    "get_class_methods",
    "trigger_error",
    "user_error",
    "set_error_handler",
    "restore_error_handler",
    "set_exception_handler",
    "restore_exception_handler",
    "get_declared_classes",
    "get_declared_traits",
    "get_declared_interfaces",
    "get_defined_functions",
    "get_defined_vars",
    "get_resource_type",
    "get_resource_id",
    "get_resources",
    "get_loaded_extensions",
    "get_defined_constants",
    "debug_backtrace",
    "debug_print_backtrace",
    "extension_loaded",
    "get_extension_funcs",
    "gc_mem_caches",
    "gc_status",
    "gc_collect_cycles",
    "gc_enabled",
    "gc_enable",
    "gc_disable",
    // Strings
    "bin2hex",
    "hex2bin",
    "wordwrap",
    "htmlspecialchars",
    "htmlentities",
    "html_entity_decode",
    "htmlspecialchars_decode",
    "get_html_translation_table",
    "sha1",
    "sha1_file",
    "md5",
    "md5_file",
    "crc32",
    "strnatcmp",
    "strnatcasecmp",
    "substr_count",
    "strspn",
    "strcspn",
    "strtok",
    "strtoupper",
    "strtolower",
    "str_contains",
    "str_starts_with",
    "str_ends_with",
    "strpos",
    "stripos",
    "strrpos",
    "strripos",
    "strrev",
    "hebrev",
    "nl2br",
    "basename",
    "dirname",
    "pathinfo",
    "stripslashes",
    "stripcslashes",
    "strstr",
    "stristr",
    "strrchr",
    "str_shuffle",
    "str_word_count",
    "str_split",
    "strpbrk",
    "substr_compare",
    "utf8_encode",
    "utf8_decode",
    "strcoll",
    "substr",
    "substr_replace",
    "quotemeta",
    "ucfirst",
    "lcfirst",
    "ucwords",
    "strtr",
    "addslashes",
    "addcslashes",
    "rtrim",
    "str_replace",
    "str_ireplace",
    "str_repeat",
    "count_chars",
    "chunk_split",
    "trim",
    "ltrim",
    "strip_tags",
    "similar_text",
    "explode",
    "implode",
    "join",
    "setlocale",
    "localeconv",
    "nl_langinfo",
    "soundex",
    "levenshtein",
    "chr",
    "ord",
    "parse_str",
    "str_getcsv",
    "str_pad",
    "chop",
    "strchr",
    "sprintf",
    "printf",
    "vprintf",
    "vsprintf",
    "fprintf",
    "vfprintf",
    "sscanf",
    "fscanf",
    "number_format",
    "metaphone",
    "str_rot13",
    "crypt",
    "convert_uuencode",
    "convert_uudecode",
    "quoted_printable_decode",
    "quoted_printable_encode",
    "uniqid",
    "version_compare",
    // Url
    "parse_url",
    "urlencode",
    "urldecode",
    "rawurlencode",
    "rawurldecode",
    "http_build_query",
    "base64_decode",
    "base64_encode",
    "get_headers",
    "get_meta_tags",
    // Math
    "abs",
    "ceil",
    "floor",
    "round",
    "sin",
    "cos",
    "tan",
    "asin",
    "acos",
    "atan",
    "atanh",
    "atan2",
    "sinh",
    "cosh",
    "tanh",
    "asinh",
    "acosh",
    "expm1",
    "log1p",
    "pi",
    "is_finite",
    "is_nan",
    "is_infinite",
    "pow",
    "exp",
    "log",
    "log10",
    "sqrt",
    "hypot",
    "deg2rad",
    "rad2deg",
    "bindec",
    "hexdec",
    "octdec",
    "decbin",
    "decoct",
    "dechex",
    "base_convert",
    "fmod",
    "fdiv",
    "intdiv",
    "rand",
    "srand",
    "mt_srand",
    "mt_rand",
    "mt_getrandmax",
    "getrandmax",
    "random_bytes",
    "random_int",
    "lcg_value",
    // Variables
    "intval",
    "floatval",
    "doubleval",
    "boolval",
    "strval",
    "is_null",
    "is_resource",
    "is_bool",
    "is_int",
    "is_integer",
    "is_long",
    "is_float",
    "is_double",
    "is_numeric",
    "is_string",
    "is_array",
    "is_object",
    "is_scalar",
    "is_callable",
    "is_iterable",
    "is_countable",
    "settype",
    "gettype",
    "get_debug_type",
    "serialize",
    "unserialize",
    "var_dump",
    "var_export",
    "debug_zval_refcount",
    "print_r",
    // Functions
    "call_user_func",
    "call_user_func_array",
    "forward_static_call",
    "forward_static_call_array",
    "register_shutdown_function",
    "register_tick_function",
    "unregister_tick_function",
    "constant",
    // Runtime
    "sleep",
    "usleep",
    "time_nanosleep",
    "time_sleep_until",
    "flush",
    "phpinfo",
    "phpversion",
    "phpcredits",
    "php_sapi_name",
    "php_uname",
    "php_ini_scanned_files",
    "php_ini_loaded_file",
    "getenv",
    "putenv",
    "getopt",
    "sys_getloadavg",
    "microtime",
    "gettimeofday",
    "getrusage",
    "hrtime",
    "get_current_user",
    "set_time_limit",
    "get_cfg_var",
    "error_log",
    "error_get_last",
    "error_clear_last",
    "memory_get_usage",
    "memory_get_peak_usage",
    "highlight_file",
    "show_source",
    "highlight_string",
    "php_strip_whitespace",
    "ini_get",
    "ini_get_all",
    "ini_set",
    "ini_alter",
    "ini_restore",
    "get_include_path",
    "set_include_path",
    "connection_aborted",
    "connection_status",
    "ignore_user_abort",
    "sys_get_temp_dir",
    "assert",
    "assert_options",
    "ftok",
    // Http
    "setcookie",
    "setrawcookie",
    "header",
    "header_remove",
    "headers_sent",
    "headers_list",
    "header_register_callback",
    "http_response_code",
    "parse_ini_file",
    "parse_ini_string",
    "is_uploaded_file",
    "move_uploaded_file",
    "mail",
    // Network
    "gethostbyaddr",
    "gethostbyname",
    "gethostbynamel",
    "gethostname",
    "dns_check_record",
    "checkdnsrr",
    "dns_get_mx",
    "getmxrr",
    "dns_get_record",
    "inet_ntop",
    "inet_pton",
    "ip2long",
    "long2ip",
    "fsockopen",
    "pfsockopen",
    "net_get_interfaces",
    "openlog",
    "syslog",
    "closelog",
    // Process
    "exec",
    "system",
    "escapeshellcmd",
    "escapeshellarg",
    "passthru",
    "shell_exec",
    "proc_open",
    "proc_close",
    "proc_terminate",
    "proc_get_status",
    "proc_nice",
    "popen",
    "pclose",
    // Password
    "password_hash",
    "password_get_info",
    "password_needs_rehash",
    "password_verify",
    "password_algos",
    // Files
    "readfile",
    "rewind",
    "rmdir",
    "umask",
    "fclose",
    "feof",
    "fgetc",
    "fgets",
    "fread",
    "fopen",
    "fpassthru",
    "ftruncate",
    "fstat",
    "fseek",
    "ftell",
    "fflush",
    "fsync",
    "fdatasync",
    "fwrite",
    "fputs",
    "mkdir",
    "rename",
    "copy",
    "tempnam",
    "tmpfile",
    "file",
    "file_get_contents",
    "file_put_contents",
    "realpath",
    "fnmatch",
    "opendir",
    "closedir",
    "chdir",
    "getcwd",
    "rewinddir",
    "readdir",
    "dir",
    "scandir",
    "glob",
    "fileatime",
    "filectime",
    "filegroup",
    "fileinode",
    "filemtime",
    "fileowner",
    "fileperms",
    "filesize",
    "filetype",
    "file_exists",
    "is_writable",
    "is_writeable",
    "is_readable",
    "is_executable",
    "is_file",
    "is_dir",
    "is_link",
    "stat",
    "lstat",
    "chown",
    "chgrp",
    "lchown",
    "lchgrp",
    "chmod",
    "touch",
    "clearstatcache",
    "disk_total_space",
    "disk_free_space",
    "diskfreespace",
    "realpath_cache_size",
    "realpath_cache_get",
    "readlink",
    "linkinfo",
    "symlink",
    "link",
    "unlink",
    "flock",
    "fputcsv",
    "fgetcsv",
    "pack",
    "unpack",
    // Streams
    "stream_select",
    "stream_context_create",
    "stream_context_set_params",
    "stream_context_get_params",
    "stream_context_set_option",
    "stream_context_get_options",
    "stream_context_get_default",
    "stream_context_set_default",
    "stream_filter_prepend",
    "stream_filter_append",
    "stream_filter_remove",
    "stream_socket_client",
    "stream_socket_server",
    "stream_socket_accept",
    "stream_socket_get_name",
    "stream_socket_recvfrom",
    "stream_socket_sendto",
    "stream_socket_enable_crypto",
    "stream_socket_shutdown",
    "stream_socket_pair",
    "stream_copy_to_stream",
    "stream_get_contents",
    "stream_supports_lock",
    "stream_set_write_buffer",
    "set_file_buffer",
    "stream_set_read_buffer",
    "stream_set_blocking",
    "socket_set_blocking",
    "stream_get_meta_data",
    "socket_get_status",
    "stream_get_line",
    "stream_wrapper_register",
    "stream_register_wrapper",
    "stream_wrapper_unregister",
    "stream_wrapper_restore",
    "stream_get_wrappers",
    "stream_get_transports",
    "stream_resolve_include_path",
    "stream_is_local",
    "stream_set_timeout",
    "socket_set_timeout",
    "stream_get_filters",
    "stream_filter_register",
    "stream_bucket_make_writeable",
    "stream_bucket_prepend",
    "stream_bucket_append",
    "stream_bucket_new",
    // Output
    "ob_start",
    "ob_flush",
    "ob_clean",
    "ob_end_flush",
    "ob_end_clean",
    "ob_get_flush",
    "ob_get_clean",
    "ob_get_length",
    "ob_get_level",
    "ob_get_status",
    "ob_get_contents",
    "ob_implicit_flush",
    "ob_list_handlers",
    "output_add_rewrite_var",
    "output_reset_rewrite_vars",
    // Arrays
    "ksort",
    "krsort",
    "natsort",
    "natcasesort",
    "asort",
    "arsort",
    "sort",
    "rsort",
    "usort",
    "uasort",
    "uksort",
    "shuffle",
    "array_walk",
    "array_walk_recursive",
    "count",
    "sizeof",
    "end",
    "prev",
    "next",
    "reset",
    "current",
    "pos",
    "key",
    "min",
    "max",
    "in_array",
    "array_search",
    "extract",
    "compact",
    "array_fill",
    "array_fill_keys",
    "range",
    "array_multisort",
    "array_push",
    "array_pop",
    "array_shift",
    "array_unshift",
    "array_splice",
    "array_slice",
    "array_merge",
    "array_merge_recursive",
    "array_replace",
    "array_replace_recursive",
    "array_keys",
    "array_key_first",
    "array_key_last",
    "array_values",
    "array_count_values",
    "array_column",
    "array_reverse",
    "array_reduce",
    "array_pad",
    "array_flip",
    "array_change_key_case",
    "array_rand",
    "array_unique",
    "array_intersect",
    "array_intersect_key",
    "array_intersect_ukey",
    "array_uintersect",
    "array_intersect_assoc",
    "array_uintersect_assoc",
    "array_intersect_uassoc",
    "array_uintersect_uassoc",
    "array_diff",
    "array_diff_key",
    "array_diff_ukey",
    "array_udiff",
    "array_diff_assoc",
    "array_udiff_assoc",
    "array_diff_uassoc",
    "array_udiff_uassoc",
    "array_sum",
    "array_product",
    "array_filter",
    "array_map",
    "array_chunk",
    "array_combine",
    "array_key_exists",
    "key_exists",
    "array_is_list",
    // Ctype
    "ctype_alnum",
    "ctype_alpha",
    "ctype_cntrl",
    "ctype_digit",
    "ctype_lower",
    "ctype_graph",
    "ctype_print",
    "ctype_punct",
    "ctype_space",
    "ctype_upper",
    "ctype_xdigit",
    // Json
    "json_encode",
    "json_decode",
    "json_last_error",
    "json_last_error_msg",
    // Pcre
    "preg_match",
    "preg_match_all",
    "preg_replace",
    "preg_replace_callback",
    "preg_replace_callback_array",
    "preg_filter",
    "preg_split",
    "preg_quote",
    "preg_grep",
    "preg_last_error",
    "preg_last_error_msg",
    // Date
    "strtotime",
    "date",
    "idate",
    "gmdate",
    "mktime",
    "gmmktime",
    "checkdate",
    "strftime",
    "gmstrftime",
    "time",
    "localtime",
    "getdate",
    "date_create",
    "date_create_immutable",
    "date_create_from_format",
    "date_create_immutable_from_format",
    "date_parse",
    "date_parse_from_format",
    "date_get_last_errors",
    "date_format",
    "date_modify",
    "date_add",
    "date_sub",
    "date_timezone_get",
    "date_timezone_set",
    "date_offset_get",
    "date_diff",
    "date_time_set",
    "date_date_set",
    "date_isodate_set",
    "date_timestamp_set",
    "date_timestamp_get",
    "timezone_open",
    "timezone_name_get",
    "timezone_name_from_abbr",
    "timezone_offset_get",
    "timezone_transitions_get",
    "timezone_location_get",
    "timezone_identifiers_list",
    "timezone_abbreviations_list",
    "timezone_version_get",
    "date_interval_create_from_date_string",
    "date_interval_format",
    "date_default_timezone_set",
    "date_default_timezone_get",
    "date_sunrise",
    "date_sunset",
    "date_sun_info",
    // Spl
    "spl_classes",
    "spl_autoload",
    "spl_autoload_call",
    "spl_autoload_extensions",
    "spl_autoload_functions",
    "spl_autoload_register",
    "spl_autoload_unregister",
    "spl_object_hash",
    "spl_object_id",
    "iterator_apply",
    "iterator_count",
    "iterator_to_array",
    "class_implements",
    "class_parents",
    "class_uses",
    // Mbstring
    "mb_strlen",
    "mb_substr",
    "mb_strpos",
    "mb_strrpos",
    "mb_stripos",
    "mb_strripos",
    "mb_strtolower",
    "mb_strtoupper",
    "mb_convert_case",
    "mb_convert_encoding",
    "mb_detect_encoding",
    "mb_internal_encoding",
    "mb_str_split",
    "mb_substr_count",
    "mb_strwidth",
    "mb_strimwidth",
    "mb_check_encoding",
    // Hash
    "hash",
    "hash_file",
    "hash_hmac",
    "hash_hmac_file",
    "hash_init",
    "hash_update",
    "hash_final",
    "hash_copy",
    "hash_algos",
    "hash_hmac_algos",
    "hash_equals",
    "hash_pbkdf2",
    "hash_hkdf",
    // Filter
    "filter_var",
    "filter_input",
    "filter_var_array",
    "filter_input_array",
    "filter_list",
    "filter_has_var",
    "filter_id",
    // Image
    "getimagesize",
    "getimagesizefromstring",
    "image_type_to_mime_type",
    "image_type_to_extension",
    "iptcparse",
    "iptcembed",
];
