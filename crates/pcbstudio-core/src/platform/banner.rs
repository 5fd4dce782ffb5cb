use crate::platform::parameters::app;

#[derive(Default, Debug)]
pub struct Banner {
    pub message: String,
}

impl Banner {
    pub fn new() -> Banner {
        Banner {
            message: String::new(),
        }
    }

    pub fn format(&mut self) {
        self.message = format!(
            "\n**** Welcome to {}, Version {}",
            app::APPLICATION_NAME,
            app::VERSION
        );
        self.message += &format!(
            "\n**** Today is {}\n",
            chrono::Utc::now().format("%m-%d-%Y %H:%M:%S")
        );
    }

    pub fn print(&mut self) {
        println!("{}", self.message);
    }
}
