pub const DEFAULT_GREETING_NAME: &str = "TypeScript User";

pub fn greet(name: &str) -> String {
    format!("Hello, {}!", name)
}
