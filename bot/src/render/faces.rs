//! Built-in cow faces.
//!
//! Templates use three placeholders: `$thoughts` (the bubble connector),
//! `$eyes` and `$tongue` (two characters each).

/// A drawable face.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Face {
    pub name: &'static str,
    template: &'static str,
}

impl Face {
    /// Fills the template.
    pub fn draw(&self, thoughts: &str, eyes: &str, tongue: &str) -> String {
        self.template
            .replace("$thoughts", thoughts)
            .replace("$eyes", eyes)
            .replace("$tongue", tongue)
    }
}

pub const DEFAULT_FACE: &str = "default";

static FACES: &[Face] = &[
    Face {
        name: "default",
        template: r"        $thoughts   ^__^
         $thoughts  ($eyes)\_______
            (__)\       )\/\
             $tongue ||----w |
                ||     ||",
    },
    Face {
        name: "moose",
        template: r"  $thoughts
   $thoughts   \_\_    _/_/
    $thoughts      \__/
           ($eyes)\_______
           (__)\       )\/\
            $tongue ||----w |
               ||     ||",
    },
    Face {
        name: "small",
        template: r"       $thoughts   ,_,
        $thoughts  ($eyes)____
           (__)    )\
            $tongue||--|| *",
    },
    Face {
        name: "tux",
        template: r"   $thoughts
    $thoughts
        .--.
       |o_o |
       |:_/ |
      //   \ \
     (|     | )
    /'\_   _/`\
    \___)=(___/",
    },
];

/// Finds a face by exact name.
pub fn lookup(name: &str) -> Option<&'static Face> {
    FACES.iter().find(|face| face.name == name)
}

/// Names of all built-in faces, sorted.
pub fn names() -> Vec<&'static str> {
    let mut names: Vec<_> = FACES.iter().map(|face| face.name).collect();
    names.sort_unstable();
    names
}
