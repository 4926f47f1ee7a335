//! State: an object's behavior changes when its state object is swapped,
//! instead of branching on an enum in every method. The canvas delegates
//! mouse events to whatever tool is current; the direction service
//! delegates ETA and routing to the travel mode.

// =============================================================================
// Canvas and tools
// =============================================================================

pub trait Tool {
    /// What the cursor shows when the mouse goes down.
    fn mouse_down(&self) -> String;
    /// What gets drawn when the mouse comes back up.
    fn mouse_up(&self) -> String;
}

pub struct Selection;

impl Tool for Selection {
    fn mouse_down(&self) -> String {
        "selection icon".to_string()
    }

    fn mouse_up(&self) -> String {
        "draw a dashed rectangle".to_string()
    }
}

pub struct Brush;

impl Tool for Brush {
    fn mouse_down(&self) -> String {
        "brush icon".to_string()
    }

    fn mouse_up(&self) -> String {
        "draw a line".to_string()
    }
}

pub struct Canvas {
    current_tool: Box<dyn Tool>,
}

impl Canvas {
    pub fn new(tool: Box<dyn Tool>) -> Self {
        Canvas { current_tool: tool }
    }

    pub fn set_current_tool(&mut self, tool: Box<dyn Tool>) {
        self.current_tool = tool;
    }

    pub fn mouse_down(&self) -> String {
        self.current_tool.mouse_down()
    }

    pub fn mouse_up(&self) -> String {
        self.current_tool.mouse_up()
    }
}

// =============================================================================
// Direction service and travel modes
// =============================================================================

pub trait TravelMode {
    fn name(&self) -> &str;
    fn eta(&self) -> u32;
    fn direction(&self) -> u32;
}

pub struct Walking;

impl TravelMode for Walking {
    fn name(&self) -> &str {
        "walking"
    }

    fn eta(&self) -> u32 {
        4
    }

    fn direction(&self) -> u32 {
        4
    }
}

pub struct Bicycling;

impl TravelMode for Bicycling {
    fn name(&self) -> &str {
        "bicycling"
    }

    fn eta(&self) -> u32 {
        2
    }

    fn direction(&self) -> u32 {
        2
    }
}

pub struct Driving;

impl TravelMode for Driving {
    fn name(&self) -> &str {
        "driving"
    }

    fn eta(&self) -> u32 {
        1
    }

    fn direction(&self) -> u32 {
        1
    }
}

pub struct DirectionService {
    travel_mode: Box<dyn TravelMode>,
}

impl DirectionService {
    pub fn new(travel_mode: Box<dyn TravelMode>) -> Self {
        DirectionService { travel_mode }
    }

    pub fn set_travel_mode(&mut self, travel_mode: Box<dyn TravelMode>) {
        self.travel_mode = travel_mode;
    }

    pub fn eta(&self) -> u32 {
        self.travel_mode.eta()
    }

    pub fn direction(&self) -> u32 {
        self.travel_mode.direction()
    }

    pub fn mode_name(&self) -> &str {
        self.travel_mode.name()
    }
}

// =============================================================================
// Demo
// =============================================================================

pub fn demo() {
    crate::banner("State");

    let mut canvas = Canvas::new(Box::new(Selection));
    println!("mouse down: {}", canvas.mouse_down());
    println!("mouse up:   {}", canvas.mouse_up());
    canvas.set_current_tool(Box::new(Brush));
    println!("mouse down: {}", canvas.mouse_down());
    println!("mouse up:   {}", canvas.mouse_up());

    let mut service = DirectionService::new(Box::new(Walking));
    for mode in [
        Box::new(Bicycling) as Box<dyn TravelMode>,
        Box::new(Driving),
    ] {
        println!(
            "{}: eta {} direction {}",
            service.mode_name(),
            service.eta(),
            service.direction()
        );
        service.set_travel_mode(mode);
    }
    println!(
        "{}: eta {} direction {}",
        service.mode_name(),
        service.eta(),
        service.direction()
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canvas_behavior_switches_with_the_tool() {
        let mut canvas = Canvas::new(Box::new(Selection));
        assert_eq!(canvas.mouse_up(), "draw a dashed rectangle");
        canvas.set_current_tool(Box::new(Brush));
        assert_eq!(canvas.mouse_up(), "draw a line");
    }

    #[test]
    fn travel_modes_carry_their_own_eta() {
        let mut service = DirectionService::new(Box::new(Walking));
        assert_eq!(service.eta(), 4);
        service.set_travel_mode(Box::new(Bicycling));
        assert_eq!(service.eta(), 2);
        service.set_travel_mode(Box::new(Driving));
        assert_eq!(service.eta(), 1);
        assert_eq!(service.direction(), 1);
    }
}
