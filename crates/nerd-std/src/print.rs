//! Console output for the people watching the terminal.
//!
//! Progress goes to standard error. The final error that ends a run is the
//! one thing printed to standard output, through [`fatalln!`].

/// Prints to the standard error, with a newline.
///
/// Equivalent to the [`eprintln!`] macro except that an info prefix is
/// printed before the message.
#[macro_export]
macro_rules! infoln {
    ($($t:tt)*) => {{
        eprint!("{} ", $crate::Style::InfoPrefix.paint("==>"));
        eprintln!($($t)*);
    }};
}

/// Prints a warning line to the standard error.
#[macro_export]
macro_rules! warnln {
    ($($t:tt)*) => {{
        eprint!("{} ", $crate::Style::WarningPrefix.paint("warning:"));
        eprintln!($($t)*);
    }};
}

/// Prints a line prefixed with a checkmark to the standard error.
#[macro_export]
macro_rules! successln {
    ($($t:tt)*) => {{
        eprint!("{} ", $crate::Style::SuccessPrefix.paint("✓"));
        eprintln!($($t)*);
    }};
}

/// Prints the error that ends the run to the standard output, with an error prefix.
#[macro_export]
macro_rules! fatalln {
    ($($t:tt)*) => {{
        print!("{} ", $crate::Style::ErrorPrefix.paint("error:"));
        println!($($t)*);
    }};
}
