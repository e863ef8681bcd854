#[macro_export]
macro_rules! debug {
    ($context:expr, $template:literal, $($value:expr),+) => {
        if $context.options().debug {
            $crate::log!($context.console(), $template, $($value),+);
        }
    };
}

#[macro_export]
macro_rules! profile {
    ($context:expr, $template:literal, $($value:expr),+) => {
        if $context.options().profile {
            $crate::log!($context.console(), $template, $($value),+);
        }
    };
}

#[macro_export]
macro_rules! log {
    ($console:expr, $template:literal, $($value:expr),+) => {
        $console
            .lock()
            .await
            .write_stderr(
                ("kiln: ".to_owned() + &format!($template, $($value),+) + "\n").as_bytes(),
            )
            .await?;
    };
}
