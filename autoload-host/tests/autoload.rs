// Autoloader registered into the reference runtime

use autoload_core::{AutoloadConfig, Autoloader};
use autoload_host::{HostConfig, HostError, Runtime};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::tempdir;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn write_class(root: &Path, relative: &str) -> PathBuf {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("created class dir");
    }
    fs::write(&path, format!("// {}", relative)).expect("wrote class file");
    fs::canonicalize(&path).expect("canonical class path")
}

#[test]
fn test_require_class_loads_on_first_use() {
    init_logging();
    let tmp = tempdir().expect("tempdir");
    let expected = write_class(tmp.path(), "Models/User.vx");

    let autoloader = Autoloader::new();
    autoloader.add("App\\", tmp.path(), false);
    let mut runtime = Runtime::new();
    autoloader.register(&mut runtime);

    assert!(!runtime.is_defined("App\\Models\\User"));
    runtime.require_class("App\\Models\\User").expect("class loads");

    assert!(runtime.is_defined("App\\Models\\User"));
    assert_eq!(runtime.origin("App\\Models\\User"), Some(&expected));
    assert_eq!(runtime.includer().included(), &[expected]);
}

#[test]
fn test_second_require_does_not_reload() {
    init_logging();
    let tmp = tempdir().expect("tempdir");
    write_class(tmp.path(), "User.vx");

    let autoloader = Autoloader::new();
    autoloader.add("App\\", tmp.path(), false);
    let mut runtime = Runtime::new();
    autoloader.register(&mut runtime);

    runtime.require_class("App\\User").expect("first");
    runtime.require_class("App\\User").expect("second");
    assert_eq!(runtime.includer().included().len(), 1);
}

#[test]
fn test_miss_surfaces_host_error() {
    init_logging();
    let tmp = tempdir().expect("tempdir");

    let autoloader = Autoloader::new();
    autoloader.add("App\\", tmp.path(), false);
    let mut runtime = Runtime::new();
    autoloader.register(&mut runtime);

    let err = runtime.require_class("App\\Missing").unwrap_err();
    assert!(matches!(err, HostError::ClassNotFound(_)));
    assert!(runtime.includer().included().is_empty());
}

#[test]
fn test_emptied_group_declines_and_other_handler_answers() {
    init_logging();
    let vendor = tempdir().expect("vendor");
    let app = tempdir().expect("app");
    write_class(vendor.path(), "Logger.vx");
    let expected = write_class(app.path(), "Logger.vx");

    let autoloader = Autoloader::new();
    autoloader.add("Log\\", vendor.path(), true);
    autoloader.add("Log\\", app.path(), false);
    let mut runtime = Runtime::new();
    assert_eq!(autoloader.register(&mut runtime), 2);

    autoloader.remove_prefix("Log\\");
    autoloader.add("Log\\", app.path(), false);

    runtime.require_class("Log\\Logger").expect("class loads");
    assert_eq!(runtime.origin("Log\\Logger"), Some(&expected));
}

#[test]
fn test_two_autoloaders_share_one_runtime() {
    init_logging();
    let theme = tempdir().expect("theme");
    let plugin = tempdir().expect("plugin");
    let theme_file = write_class(theme.path(), "Header.vx");
    let plugin_file = write_class(plugin.path(), "Widget.vx");

    let theme_loader = Autoloader::new();
    theme_loader.add("Theme\\", theme.path(), false);
    let plugin_loader = Autoloader::with_config(AutoloadConfig::default());
    plugin_loader.add("Plugin\\", plugin.path(), false);

    let mut runtime = Runtime::new();
    theme_loader.register(&mut runtime);
    plugin_loader.register(&mut runtime);

    runtime.require_class("Plugin\\Widget").expect("plugin class");
    runtime.require_class("Theme\\Header").expect("theme class");
    assert_eq!(runtime.origin("Plugin\\Widget"), Some(&plugin_file));
    assert_eq!(runtime.origin("Theme\\Header"), Some(&theme_file));
}

#[test]
fn test_full_chain_rejects_one_group_only() {
    init_logging();
    let tmp = tempdir().expect("tempdir");
    let expected = write_class(tmp.path(), "User.vx");

    let autoloader = Autoloader::new();
    autoloader.add("Core\\", tmp.path(), true);
    autoloader.add("App\\", tmp.path(), false);

    let mut runtime = Runtime::with_config(HostConfig {
        max_handlers: Some(1),
    });
    assert_eq!(autoloader.register(&mut runtime), 1);
    assert!(autoloader.is_registered());

    // Only the prepend handler made it in
    runtime.require_class("Core\\User").expect("core class");
    assert_eq!(runtime.origin("Core\\User"), Some(&expected));
    assert!(runtime.require_class("App\\User").is_err());
}

#[test]
fn test_directory_named_like_class_is_not_a_candidate() {
    init_logging();
    let tmp = tempdir().expect("tempdir");
    fs::create_dir_all(tmp.path().join("User.vx")).expect("dir");
    let expected = write_class(tmp.path(), "Models/User.vx");

    let autoloader = Autoloader::new();
    autoloader.add("App\\", tmp.path(), false);
    let mut runtime = Runtime::new();
    autoloader.register(&mut runtime);

    let err = runtime.require_class("App\\User").unwrap_err();
    assert!(matches!(err, HostError::ClassNotFound(_)));
    runtime.require_class("App\\Models\\User").expect("nested class");
    assert_eq!(runtime.origin("App\\Models\\User"), Some(&expected));
}
