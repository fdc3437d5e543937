//! Integration tests rendering a module tree with the shipped rst template.
use std::fs;
use std::path::PathBuf;

use modoc_core::{Modoc, VersionTag};
use tempfile::TempDir;

const COPY: &str = r#"#!/usr/bin/python
# -*- coding: utf-8 -*-

DOCUMENTATION = '''
---
module: copy
version_added: "historical"
short_description: Copies files to remote locations.
description:
     - The M(copy) module copies a file on the local box to remote locations.
options:
  src:
    description:
      - Local path to a file to copy to the remote server; can be absolute or relative.
    required: false
    default: null
  dest:
    description:
      - Remote absolute path where the file should be copied to.
    required: true
  backup:
    description:
      - Create a backup file including the timestamp information.
    required: false
    choices: [ "yes", "no" ]
    default: "no"
notes:
   - The I(copy) module recursively copies facts from C(src).
author: Michael DeHaan
'''

EXAMPLES = '''
- copy: src=/srv/myfiles/foo.conf dest=/etc/foo.conf
'''
"#;

const URI: &str = r#"
DOCUMENTATION = '''
module: uri
short_description: Interacts with webservices
description:
  - Interacts with HTTP and HTTPS web services. See U(http://example.com/uri).
version_added: "1.1"
options:
  url:
    description: [ "HTTP or HTTPS URL" ]
    required: true
'''
"#;

fn shipped_templates() -> PathBuf {
	PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../templates")
}

fn module_tree(root: &std::path::Path) -> PathBuf {
	let library = root.join("library");
	fs::create_dir_all(library.join("files")).unwrap();
	fs::create_dir_all(library.join("network")).unwrap();
	fs::write(library.join("files/copy"), COPY).unwrap();
	fs::write(library.join("network/uri"), URI).unwrap();
	library
}

#[test]
fn renders_with_shipped_template() {
	let temp_dir = TempDir::new().unwrap();
	let library = module_tree(temp_dir.path());
	let out = temp_dir.path().join("rst");

	Modoc::new(&library, shipped_templates())
		.with_output_dir(Some(out.clone()))
		.with_tool_version("1.3")
		.with_date("2013-09-13")
		.run()
		.unwrap();

	let copy = fs::read_to_string(out.join("copy_module.rst")).unwrap();
	assert!(copy.starts_with(".. _copy:\n"));
	assert!(copy.contains("copy - Copies files to remote locations.\n+++++"));
	assert!(copy.contains("The `copy` module copies a file"));
	assert!(copy.contains("   * - backup\n     - no\n     - no\n     - yes, no\n"));
	assert!(copy.contains("   * - dest\n     - yes\n"));
	assert!(copy.contains("    - copy: src=/srv/myfiles/foo.conf dest=/etc/foo.conf"));
	assert!(copy.contains(".. note:: The *copy* module recursively copies facts from `src`."));
	assert!(!copy.contains("versionadded"));
	assert!(copy.contains("generated on 2013-09-13 for version 1.3."));

	let uri = fs::read_to_string(out.join("uri_module.rst")).unwrap();
	assert!(uri.contains(".. versionadded:: 1.1\n"));
	assert!(uri.contains("See http://example.com/uri."));
	assert!(!uri.contains("Examples\n--------"));

	let network = fs::read_to_string(out.join("list_of_network_modules.rst")).unwrap();
	assert!(network.starts_with("Network Modules\n```````````````\n"));
	assert!(network.contains("   uri_module\n"));

	let index = fs::read_to_string(out.join("modules_by_category.rst")).unwrap();
	assert!(index.contains("   list_of_files_modules\n   list_of_network_modules\n"));
}

#[test]
fn raised_threshold_hides_recent_versions() {
	let temp_dir = TempDir::new().unwrap();
	let library = module_tree(temp_dir.path());
	let out = temp_dir.path().join("rst");

	Modoc::new(&library, shipped_templates())
		.with_output_dir(Some(out.clone()))
		.with_notable_version(VersionTag::new(1, 2))
		.run()
		.unwrap();

	let uri = fs::read_to_string(out.join("uri_module.rst")).unwrap();
	assert!(!uri.contains("versionadded"));
}

#[test]
fn unquoted_version_is_shown_as_written() {
	let temp_dir = TempDir::new().unwrap();
	let library = temp_dir.path().join("library");
	fs::create_dir_all(library.join("system")).unwrap();
	fs::write(
		library.join("system/cron"),
		"DOCUMENTATION = '''\nmodule: cron\nshort_description: Manage cron entries\nversion_added: 1.10\noptions: {}\n'''\n",
	)
	.unwrap();
	let out = temp_dir.path().join("rst");

	Modoc::new(&library, shipped_templates())
		.with_output_dir(Some(out.clone()))
		.with_notable_version(VersionTag::new(1, 9))
		.run()
		.unwrap();

	let cron = fs::read_to_string(out.join("cron_module.rst")).unwrap();
	assert!(cron.contains(".. versionadded:: 1.10\n"));
}
