use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Diagnostic, Error)]
#[non_exhaustive]
pub enum TomeError {
	#[error(transparent)]
	#[diagnostic(code(tome::io_error))]
	Io(#[from] std::io::Error),

	#[error("failed to parse front matter in `{path}`: {reason}")]
	#[diagnostic(
		code(tome::front_matter),
		help("check that the metadata block between the `+++` fences is valid")
	)]
	FrontMatter { path: String, reason: String },

	#[error(
		"conflicting fields for document `{id}`: {fields} (defined in `{first_file}` and `{second_file}`)"
	)]
	#[diagnostic(
		code(tome::conflict),
		help("each field of a document must be supplied by exactly one source file")
	)]
	Conflict {
		id: String,
		fields: String,
		first_file: String,
		second_file: String,
	},

	#[error(
		"expression `{pattern}` in field `{field}` of document `{document}` ({file}) matched {matches} files"
	)]
	#[diagnostic(
		code(tome::ambiguous_expansion),
		help("a scalar field may expand to at most one file; use an array field to fan out")
	)]
	AmbiguousExpansion {
		document: String,
		field: String,
		pattern: String,
		matches: usize,
		file: String,
	},

	#[error("failed to read `{path}`: {reason}")]
	#[diagnostic(code(tome::file_read))]
	FileRead { path: String, reason: String },

	#[error("invalid glob pattern `{pattern}`: {reason}")]
	#[diagnostic(code(tome::glob_pattern))]
	GlobPattern { pattern: String, reason: String },

	#[error("failed to parse config file: {0}")]
	#[diagnostic(
		code(tome::config_parse),
		help("check that tome.toml is valid TOML with a `markdownFields` list")
	)]
	ConfigParse(String),

	#[error("unsupported source file format: `{0}`")]
	#[diagnostic(
		code(tome::unsupported_format),
		help("supported formats: md, markdown, json, toml")
	)]
	UnsupportedFormat(String),
}

pub type TomeResult<T> = Result<T, TomeError>;
pub type AnyError = Box<dyn std::error::Error>;
pub type AnyEmptyResult = Result<(), AnyError>;
pub type AnyResult<T> = Result<T, AnyError>;
