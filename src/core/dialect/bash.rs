use super::DialectSyntax;
use crate::menu::{self, MenuItem};
use crate::snippets::Snippet;

pub struct Bash;

const SNIPPETS: &[Snippet] = &[
    Snippet {
        id: "shebang",
        name: "Shebang (#!/bin/bash)",
        code: "#!/bin/bash\n",
    },
    Snippet {
        id: "header_comment",
        name: "Header Comment Block",
        code: "#-------------------------------------\n# Script Name: \n# Description: \n# Author: \n# Date: \n#-------------------------------------\n\n",
    },
    Snippet {
        id: "simple_func",
        name: "Simple Function",
        code: "my_function() {\n  echo \"Hello from function!\"\n}\n\n# Call the function\n# my_function\n",
    },
    Snippet {
        id: "read_input",
        name: "Read User Input",
        code: "read -p \"Enter value: \" user_input\necho \"You entered: $user_input\"\n",
    },
];

const MENU_LOOP: &str = "while true\ndo\n    show_menu\n    read_option\ndone\n";

impl DialectSyntax for Bash {
    fn name(&self) -> &'static str {
        "Bash"
    }

    fn extension(&self) -> &'static str {
        "sh"
    }

    fn snippets(&self) -> &'static [Snippet] {
        SNIPPETS
    }

    fn render_menu(&self, items: &[MenuItem]) -> String {
        let mut code = String::from("show_menu() {\n");
        code.push_str(&format!("    echo \"{}\"\n", menu::BANNER_RULE));
        code.push_str(&format!("    echo \"{}\"\n", menu::BANNER_TITLE));
        code.push_str(&format!("    echo \"{}\"\n", menu::BANNER_RULE));
        for (number, item) in menu::numbered(items) {
            code.push_str(&format!("    echo \"{}. {}\"\n", number, item.title));
        }
        code.push_str(&format!("    echo \"{}\"\n}}\n\n", menu::EXIT_LABEL));

        code.push_str("read_option(){\n    local choice\n");
        code.push_str(&format!(
            "    read -p \"Enter choice [ 1 - {} ] \" choice\n",
            items.len()
        ));
        code.push_str("    case $choice in\n");
        for (number, item) in menu::numbered(items) {
            code.push_str(&format!("        {}) {} ;;\n", number, item.action));
        }
        code.push_str(&format!(
            "        {}) echo \"{}\" ; exit 0 ;;\n",
            menu::EXIT_CHOICE,
            menu::EXIT_MESSAGE
        ));
        code.push_str(&format!(
            "        *) echo -e \"{}\" && sleep {}\n",
            menu::INVALID_OPTION_MESSAGE,
            menu::INVALID_OPTION_PAUSE_SECS
        ));
        code.push_str("    esac\n}\n\n");

        code.push_str(MENU_LOOP);
        code
    }
}
