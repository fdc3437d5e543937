/// Example documentation block shipped with the tool.
const DOCUMENTATION_EXAMPLE: &str = include_str!("boilerplate.yml");

/// Skeleton `DOCUMENTATION` and `EXAMPLES` blocks for a new module.
pub fn boilerplate() -> String {
	let mut output = String::new();
	output.push_str("DOCUMENTATION = '''\n");
	output.push_str(DOCUMENTATION_EXAMPLE);
	if !DOCUMENTATION_EXAMPLE.ends_with('\n') {
		output.push('\n');
	}
	output.push_str("'''\n\n\n");
	output.push_str("EXAMPLES = '''\n");
	output.push_str("# example of doing ___ from a playbook\n");
	output.push_str("your_module: some_arg=1 other_arg=2\n");
	output.push_str("'''\n");
	output
}
